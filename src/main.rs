use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap,
};

use football_dash::config::AppConfig;
use football_dash::export::default_export_path;
use football_dash::league_table::{FormMark, LeagueMetrics, Zone, form_markers, team_rates};
use football_dash::provider::spawn_provider;
use football_dash::state::{
    AppState, ChatMessage, ChatRole, Delta, ProviderCommand, Screen, apply_delta, source_label,
};
use football_dash::win_prob::{self, Verdict};
use football_dash::stats;

const WELCOME: &str = "Bonjour ! Posez une question sur le championnat : classement, \
prochains matchs, forme d'une équipe, pronostic entre deux équipes…";

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
    auto_refresh: Option<Duration>,
    last_refresh: Instant,
}

impl App {
    fn new(config: &AppConfig, cmd_tx: Option<mpsc::Sender<ProviderCommand>>) -> Self {
        let mut state = AppState::new();
        state.competition = config.competition;
        state.api_key_present = config.has_api_key();
        state.cache_enabled = config.cache_enabled;
        state.auto_refresh_secs = config.auto_refresh_secs;
        state.chat.push(ChatMessage {
            role: ChatRole::Assistant,
            text: WELCOME.to_string(),
        });
        Self {
            state,
            should_quit: false,
            cmd_tx,
            auto_refresh: config.auto_refresh_secs.map(Duration::from_secs),
            last_refresh: Instant::now(),
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.input_active {
            self.on_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.state.screen = Screen::ALL[idx];
            }
            KeyCode::Tab => self.state.screen = self.state.screen.next(),
            KeyCode::BackTab => self.state.screen = self.state.screen.prev(),
            KeyCode::Char('i') | KeyCode::Char('/')
                if self.state.screen == Screen::Assistant =>
            {
                self.state.input_active = true;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if self.state.screen == Screen::Assistant {
                    self.state.chat_scroll = self.state.chat_scroll.saturating_sub(1);
                } else {
                    self.state.select_next();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.state.screen == Screen::Assistant {
                    self.state.chat_scroll = self.state.chat_scroll.saturating_add(1);
                } else {
                    self.state.select_prev();
                }
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let competition = self.state.cycle_competition();
                self.state
                    .push_log(format!("[INFO] Switched to {}", competition.label()));
                self.request_refresh(false);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.request_refresh(true),
            KeyCode::Char('c') | KeyCode::Char('C') => {
                let enabled = !self.state.cache_enabled;
                self.send(ProviderCommand::SetCacheEnabled(enabled), "Cache toggle");
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                self.send(ProviderCommand::ClearCache, "Cache clear");
            }
            KeyCode::Char('e') | KeyCode::Char('E') => self.request_export(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Esc => self.state.help_overlay = false,
            _ => {}
        }
    }

    fn on_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.input_active = false,
            KeyCode::Enter => {
                if let Some(question) = self.state.take_input() {
                    self.state.ask(&question);
                }
            }
            KeyCode::Backspace => {
                self.state.input.pop();
            }
            KeyCode::Char(c) => self.state.input.push(c),
            _ => {}
        }
    }

    fn send(&mut self, cmd: ProviderCommand, what: &str) -> bool {
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log(format!("[INFO] {what} unavailable"));
            return false;
        };
        if tx.send(cmd).is_err() {
            self.state.push_log(format!("[WARN] {what} request failed"));
            return false;
        }
        true
    }

    fn request_refresh(&mut self, announce: bool) {
        let competition = self.state.competition;
        if self.send(ProviderCommand::Refresh { competition }, "Refresh") {
            self.state.loading = true;
            if announce {
                self.state
                    .push_log(format!("[INFO] Refreshing {}", competition.label()));
            }
        }
        self.last_refresh = Instant::now();
    }

    fn request_export(&mut self) {
        if self.state.standings.is_empty() {
            self.state.push_log("[INFO] Nothing to export yet");
            return;
        }
        let competition = self.state.competition;
        let cmd = ProviderCommand::Export {
            path: default_export_path(competition),
            competition,
            standings: self.state.standings.clone(),
        };
        if self.send(cmd, "Export") {
            self.state.push_log("[INFO] Export started");
        }
    }

    fn maybe_auto_refresh(&mut self) {
        let Some(interval) = self.auto_refresh else {
            return;
        };
        if !self.state.loading && self.last_refresh.elapsed() >= interval {
            self.request_refresh(false);
        }
    }
}

fn main() -> io::Result<()> {
    let config = AppConfig::load();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let mut app = App::new(&config, Some(cmd_tx));
    spawn_provider(config, tx, cmd_rx);
    app.request_refresh(true);

    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        app.maybe_auto_refresh();

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let state = &app.state;
    let title = Paragraph::new(header_text(state))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    let titles: Vec<String> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{} {}", i + 1, s.label()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.screen.index())
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(tabs, chunks[1]);

    match state.screen {
        Screen::Standings => render_standings(frame, chunks[2], state),
        Screen::Matches => render_matches(frame, chunks[2], state),
        Screen::Scorers => render_scorers(frame, chunks[2], state),
        Screen::Analysis => render_analysis(frame, chunks[2], state),
        Screen::System => render_system(frame, chunks[2], state),
        Screen::Assistant => render_assistant(frame, chunks[2], state),
    }

    let console = Paragraph::new(console_text(state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[3]);

    let footer = Paragraph::new(footer_text(state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[4]);

    if state.help_overlay {
        let area = frame.size();
        render_help_overlay(frame, area);
    }
}

fn header_text(state: &AppState) -> String {
    let updated = state.updated_at.as_deref().unwrap_or("--:--:--");
    let status = if state.loading { " | chargement…" } else { "" };
    format!(
        " ⚽ FOOTBALL DASH | {} | {} | MAJ {updated}{status}",
        state.competition.label(),
        source_label(state.source)
    )
}

fn footer_text(state: &AppState) -> String {
    match state.screen {
        Screen::Assistant if state.input_active => {
            "Entrée Envoyer | Échap Arrêter la saisie".to_string()
        }
        Screen::Assistant => {
            "i or / Écrire | j/k Défiler | 1-6/Tab Onglets | l Ligue | ? Aide | q Quitter"
                .to_string()
        }
        _ => "1-6/Tab Onglets | j/k Sélection | l Ligue | r Rafraîchir | c Cache | x Vider | e Export | ? Aide | q Quitter"
            .to_string(),
    }
}

fn render_standings(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(60), Constraint::Length(36)])
        .split(area);

    let block = Block::default()
        .title(format!("Classement {}", state.competition.label()))
        .borders(Borders::ALL);
    if state.standings.is_empty() {
        frame.render_widget(empty_text(state).block(block), columns[0]);
    } else {
        let inner_height = columns[0].height.saturating_sub(3) as usize;
        let (start, end) = visible_range(state.selected, state.standings.len(), inner_height);
        let len = state.standings.len();

        let rows = state.standings[start..end]
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let zone = Zone::for_position(row.position, len);
                let mut style = Style::default().fg(zone_color(zone));
                if start + i == state.selected {
                    style = style.bg(Color::DarkGray);
                }
                Row::new(vec![
                    Cell::from(row.position.to_string()),
                    Cell::from(row.team.clone()),
                    Cell::from(row.played.to_string()),
                    Cell::from(row.won.to_string()),
                    Cell::from(row.draw.to_string()),
                    Cell::from(row.lost.to_string()),
                    Cell::from(format!("{}:{}", row.goals_for, row.goals_against)),
                    Cell::from(format!("{:+}", row.goal_difference)),
                    Cell::from(row.points.to_string()),
                    Cell::from(form_line(&row.form)),
                ])
                .style(style)
            })
            .collect::<Vec<_>>();

        let widths = [
            Constraint::Length(3),
            Constraint::Min(16),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(6),
        ];
        let table = Table::new(rows, widths)
            .header(
                Row::new(["#", "Équipe", "J", "V", "N", "D", "Buts", "Diff", "Pts", "Forme"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(block);
        frame.render_widget(table, columns[0]);
    }

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(6)])
        .split(columns[1]);
    let metrics = Paragraph::new(metrics_text(state))
        .block(Block::default().title("Métriques").borders(Borders::ALL));
    frame.render_widget(metrics, side[0]);

    let legend = Paragraph::new(vec![
        Line::styled("■ Ligue des Champions", Style::default().fg(zone_color(Zone::ChampionsLeague))),
        Line::styled("■ Ligue Europa", Style::default().fg(zone_color(Zone::EuropaLeague))),
        Line::styled("■ Relégation", Style::default().fg(zone_color(Zone::Relegation))),
    ])
    .block(Block::default().title("Zones").borders(Borders::ALL));
    frame.render_widget(legend, side[1]);
}

fn zone_color(zone: Zone) -> Color {
    match zone {
        Zone::ChampionsLeague => Color::Green,
        Zone::EuropaLeague => Color::Cyan,
        Zone::Relegation => Color::Red,
        Zone::None => Color::Reset,
    }
}

fn form_line(form: &str) -> Line<'static> {
    let spans = form_markers(form)
        .into_iter()
        .map(|mark| {
            let (ch, color) = match mark {
                FormMark::Win => ("W", Color::Green),
                FormMark::Draw => ("D", Color::Yellow),
                FormMark::Loss => ("L", Color::Red),
                FormMark::Unknown => ("-", Color::DarkGray),
            };
            Span::styled(ch, Style::default().fg(color))
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn metrics_text(state: &AppState) -> String {
    let Some(metrics) = LeagueMetrics::compute(&state.standings) else {
        return "Aucune donnée".to_string();
    };
    metrics
        .rows()
        .into_iter()
        .map(|(label, value)| format!("{label:<18} {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_matches(frame: &mut Frame, area: Rect, state: &AppState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let upcoming = if state.upcoming.is_empty() {
        "Aucun match à venir".to_string()
    } else {
        state
            .upcoming
            .iter()
            .map(|f| {
                let day = f.matchday.map(|d| format!("J{d}")).unwrap_or_default();
                format!("{}  {}\n  {} vs {}\n", f.kickoff_label(), day, f.home, f.away)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    let upcoming = Paragraph::new(upcoming)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("📅 Prochains matchs").borders(Borders::ALL));
    frame.render_widget(upcoming, halves[0]);

    let results = if state.results.is_empty() {
        "Aucun résultat récent".to_string()
    } else {
        state
            .results
            .iter()
            .map(|f| format!("{}  {} {} {}", f.date_label(), f.home, f.score_label(), f.away))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let results = Paragraph::new(results)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("✅ Derniers résultats").borders(Borders::ALL));
    frame.render_widget(results, halves[1]);
}

fn render_scorers(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Meilleurs buteurs").borders(Borders::ALL);
    if state.scorers.is_empty() {
        frame.render_widget(empty_text(state).block(block), area);
        return;
    }

    let opt = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string());
    let rows = state
        .scorers
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Row::new(vec![
                (i + 1).to_string(),
                s.player.clone(),
                s.team.clone(),
                s.goals.to_string(),
                opt(s.assists),
                opt(s.penalties),
                opt(s.played),
            ])
        })
        .collect::<Vec<_>>();
    let widths = [
        Constraint::Length(3),
        Constraint::Min(18),
        Constraint::Min(16),
        Constraint::Length(5),
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Length(7),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(["#", "Joueur", "Équipe", "Buts", "Passes", "Pén.", "Matchs"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block);
    frame.render_widget(table, area);
}

fn render_analysis(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bars = state
        .standings
        .iter()
        .map(|row| {
            let label = if row.short_name.is_empty() {
                row.team.chars().take(3).collect::<String>()
            } else {
                row.short_name.clone()
            };
            Bar::default()
                .value(row.points as u64)
                .label(Line::from(label))
                .style(Style::default().fg(zone_color(Zone::for_position(
                    row.position,
                    state.standings.len(),
                ))))
        })
        .collect::<Vec<_>>();
    let chart = BarChart::default()
        .block(Block::default().title("Points par équipe").borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1);
    frame.render_widget(chart, rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let rate_rows = team_rates(&state.standings)
        .into_iter()
        .map(|r| {
            Row::new(vec![
                r.position.to_string(),
                r.team,
                format!("{:.2}", r.goals_for_per_match),
                format!("{:.2}", r.goals_against_per_match),
                format!("{:.1}%", r.win_rate),
            ])
        })
        .collect::<Vec<_>>();
    let widths = [
        Constraint::Length(3),
        Constraint::Min(16),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
    ];
    let table = Table::new(rate_rows, widths)
        .header(
            Row::new(["#", "Équipe", "BP/m", "BC/m", "% vict."])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().title("Ratios").borders(Borders::ALL));
    frame.render_widget(table, bottom[0]);

    let prediction = Paragraph::new(prediction_text(state))
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Pronostic").borders(Borders::ALL));
    frame.render_widget(prediction, bottom[1]);
}

/// Selected team at home against the leader (or the runner-up when the leader is selected).
fn prediction_text(state: &AppState) -> String {
    let Some(home) = state.selected_team() else {
        return "Aucune donnée".to_string();
    };
    let opponent_idx = if state.selected == 0 { 1 } else { 0 };
    let Some(away) = state.standings.get(opponent_idx) else {
        return "Pas assez d'équipes".to_string();
    };

    let result = win_prob::predict(&stats::normalize(home), &stats::normalize(away), true);
    let verdict = match result.verdict {
        Verdict::TeamAFavored => format!("{} favori", home.team),
        Verdict::TeamBFavored => format!("{} favori", away.team),
        Verdict::Close => "Match serré".to_string(),
    };
    format!(
        "{} (dom.) vs {}\n\nVictoire {}: {:.1}%\nNul: {:.1}%\nVictoire {}: {:.1}%\n\n{verdict}",
        home.team,
        away.team,
        home.team,
        result.team_a,
        result.draw,
        away.team,
        result.team_b,
    )
}

fn render_system(frame: &mut Frame, area: Rect, state: &AppState) {
    let yes_no = |b: bool| if b { "oui" } else { "non" };
    let auto = state
        .auto_refresh_secs
        .map(|s| format!("toutes les {s}s"))
        .unwrap_or_else(|| "désactivé".to_string());
    let lines = [
        format!("Clé API configurée : {}", yes_no(state.api_key_present)),
        format!("Source des données : {}", source_label(state.source)),
        format!("Cache activé       : {}", yes_no(state.cache_enabled)),
        format!("Entrées en cache   : {}", state.cache_entries),
        format!("Rafraîchissement   : {auto}"),
        String::new(),
        format!("Équipes            : {}", state.standings.len()),
        format!("Matchs à venir     : {}", state.upcoming.len()),
        format!("Résultats          : {}", state.results.len()),
        format!("Buteurs            : {}", state.scorers.len()),
        format!(
            "Dernière mise à jour : {}",
            state.updated_at.as_deref().unwrap_or("jamais")
        ),
    ];
    let text = Paragraph::new(lines.join("\n"))
        .block(Block::default().title("Système").borders(Borders::ALL));
    frame.render_widget(text, area);
}

fn render_assistant(frame: &mut Frame, area: Rect, state: &AppState) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for msg in &state.chat {
        let (who, color) = match msg.role {
            ChatRole::User => ("Vous", Color::Cyan),
            ChatRole::Assistant => ("Assistant", Color::Green),
        };
        lines.push(Line::styled(
            format!("{who} :"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        for text_line in msg.text.lines() {
            lines.push(Line::from(text_line.to_string()));
        }
        lines.push(Line::from(""));
    }

    // Stick to the bottom; chat_scroll moves up from there.
    let visible = parts[0].height.saturating_sub(2);
    let total = lines.len() as u16;
    let offset = total
        .saturating_sub(visible)
        .saturating_sub(state.chat_scroll);
    let chat = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0))
        .block(Block::default().title("💬 Assistant").borders(Borders::ALL));
    frame.render_widget(chat, parts[0]);

    let (input_text, style) = if state.input_active {
        (format!("{}▏", state.input), Style::default().fg(Color::Yellow))
    } else {
        (
            "Appuyez sur i ou / pour poser une question".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };
    let input = Paragraph::new(input_text)
        .style(style)
        .block(Block::default().title("Question").borders(Borders::ALL));
    frame.render_widget(input, parts[1]);
}

fn empty_text(state: &AppState) -> Paragraph<'static> {
    let msg = if state.loading {
        "Chargement…"
    } else {
        "Aucune donnée disponible"
    };
    Paragraph::new(msg).style(Style::default().fg(Color::DarkGray))
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    let skip = state.logs.len().saturating_sub(3);
    state
        .logs
        .iter()
        .skip(skip)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Football Dash - Aide",
        "",
        "Navigation :",
        "  1-6 / Tab    Changer d'onglet",
        "  j/k or ↑/↓   Sélection / défilement",
        "  l            Championnat suivant",
        "  ?            Afficher l'aide",
        "  q            Quitter",
        "",
        "Données :",
        "  r            Rafraîchir",
        "  c            Activer/désactiver le cache",
        "  x            Vider le cache",
        "  e            Exporter en xlsx",
        "",
        "Assistant :",
        "  i or /       Écrire une question",
        "  Entrée       Envoyer",
        "  Échap        Arrêter la saisie",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Aide").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
