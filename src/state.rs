use std::collections::VecDeque;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::assistant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Competition {
    Ligue1,
    PremierLeague,
    LaLiga,
    Bundesliga,
    SerieA,
}

impl Competition {
    pub const ALL: [Competition; 5] = [
        Competition::Ligue1,
        Competition::PremierLeague,
        Competition::LaLiga,
        Competition::Bundesliga,
        Competition::SerieA,
    ];

    /// football-data.org competition code.
    pub fn code(self) -> &'static str {
        match self {
            Competition::Ligue1 => "FL1",
            Competition::PremierLeague => "PL",
            Competition::LaLiga => "PD",
            Competition::Bundesliga => "BL1",
            Competition::SerieA => "SA",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Competition::Ligue1 => "Ligue 1",
            Competition::PremierLeague => "Premier League",
            Competition::LaLiga => "La Liga",
            Competition::Bundesliga => "Bundesliga",
            Competition::SerieA => "Serie A",
        }
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        let code = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    Live,
    Cached,
    Demo,
}

/// One team's row in a league table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub position: u32,
    pub team: String,
    #[serde(default)]
    pub short_name: String,
    pub played: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    // W/D/L characters, most recent last.
    #[serde(default)]
    pub form: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureStatus {
    Scheduled,
    Timed,
    InPlay,
    Paused,
    Finished,
    Postponed,
    Suspended,
    Cancelled,
    Other,
}

impl FixtureStatus {
    pub fn from_api(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "SCHEDULED" => FixtureStatus::Scheduled,
            "TIMED" => FixtureStatus::Timed,
            "IN_PLAY" | "LIVE" => FixtureStatus::InPlay,
            "PAUSED" => FixtureStatus::Paused,
            "FINISHED" | "AWARDED" => FixtureStatus::Finished,
            "POSTPONED" => FixtureStatus::Postponed,
            "SUSPENDED" => FixtureStatus::Suspended,
            "CANCELLED" | "CANCELED" => FixtureStatus::Cancelled,
            _ => FixtureStatus::Other,
        }
    }

    pub fn is_upcoming(self) -> bool {
        matches!(self, FixtureStatus::Scheduled | FixtureStatus::Timed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u64,
    pub home: String,
    pub away: String,
    pub kickoff: String,
    pub competition: String,
    pub matchday: Option<u32>,
    pub status: FixtureStatus,
    #[serde(default)]
    pub score_home: Option<u32>,
    #[serde(default)]
    pub score_away: Option<u32>,
}

impl Fixture {
    /// Kickoff rendered in French, e.g. "samedi 18 janvier 21:00".
    pub fn kickoff_label(&self) -> String {
        format_kickoff_fr(&self.kickoff)
    }

    pub fn date_label(&self) -> String {
        match parse_kickoff(&self.kickoff) {
            Some(dt) => format!("{:02}/{:02}/{}", dt.day(), dt.month(), dt.year()),
            None => "--/--/----".to_string(),
        }
    }

    pub fn score_label(&self) -> String {
        match (self.score_home, self.score_away) {
            (Some(h), Some(a)) => format!("{h} - {a}"),
            _ => "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorer {
    pub player: String,
    pub team: String,
    pub goals: u32,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub penalties: Option<u32>,
    #[serde(default)]
    pub played: Option<u32>,
}

/// Everything shown for one competition after a refresh.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub competition: Competition,
    pub source: DataSource,
    pub standings: Vec<StandingsEntry>,
    pub upcoming: Vec<Fixture>,
    pub results: Vec<Fixture>,
    pub scorers: Vec<Scorer>,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Standings,
    Matches,
    Scorers,
    Analysis,
    System,
    Assistant,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Standings,
        Screen::Matches,
        Screen::Scorers,
        Screen::Analysis,
        Screen::System,
        Screen::Assistant,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Standings => "Classement",
            Screen::Matches => "Matchs",
            Screen::Scorers => "Buteurs",
            Screen::Analysis => "Analyse",
            Screen::System => "Système",
            Screen::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub competition: Competition,
    pub source: DataSource,
    pub standings: Vec<StandingsEntry>,
    pub upcoming: Vec<Fixture>,
    pub results: Vec<Fixture>,
    pub scorers: Vec<Scorer>,
    pub updated_at: Option<String>,
    pub loading: bool,
    pub selected: usize,
    pub api_key_present: bool,
    pub cache_enabled: bool,
    pub cache_entries: usize,
    pub auto_refresh_secs: Option<u64>,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
    pub chat: Vec<ChatMessage>,
    pub input: String,
    pub input_active: bool,
    pub chat_scroll: u16,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Standings,
            competition: Competition::Ligue1,
            source: DataSource::Demo,
            standings: Vec::with_capacity(20),
            upcoming: Vec::with_capacity(10),
            results: Vec::with_capacity(10),
            scorers: Vec::with_capacity(10),
            updated_at: None,
            loading: false,
            selected: 0,
            api_key_present: false,
            cache_enabled: true,
            cache_entries: 0,
            auto_refresh_secs: None,
            logs: VecDeque::with_capacity(200),
            help_overlay: false,
            chat: Vec::new(),
            input: String::new(),
            input_active: false,
            chat_scroll: 0,
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn select_next(&mut self) {
        if self.standings.is_empty() {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1).min(self.standings.len() - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_team(&self) -> Option<&StandingsEntry> {
        self.standings.get(self.selected)
    }

    /// Switches to the next competition and drops the data of the previous one.
    pub fn cycle_competition(&mut self) -> Competition {
        self.competition = self.competition.next();
        self.standings.clear();
        self.upcoming.clear();
        self.results.clear();
        self.scorers.clear();
        self.selected = 0;
        self.updated_at = None;
        self.loading = true;
        self.competition
    }

    /// Answers a question against the current snapshot and records both sides of the exchange.
    pub fn ask(&mut self, question: &str) -> &str {
        let fixtures = (!self.upcoming.is_empty()).then_some(self.upcoming.as_slice());
        let reply = assistant::answer(question, &self.standings, fixtures);
        self.record_exchange(question, reply)
    }

    pub fn ask_with_rng<R: rand::Rng + ?Sized>(&mut self, question: &str, rng: &mut R) -> &str {
        let fixtures = (!self.upcoming.is_empty()).then_some(self.upcoming.as_slice());
        let reply = assistant::answer_with_rng(question, &self.standings, fixtures, rng);
        self.record_exchange(question, reply)
    }

    fn record_exchange(&mut self, question: &str, reply: String) -> &str {
        const MAX_CHAT: usize = 100;
        self.chat.push(ChatMessage {
            role: ChatRole::User,
            text: question.trim().to_string(),
        });
        self.chat.push(ChatMessage {
            role: ChatRole::Assistant,
            text: reply,
        });
        if self.chat.len() > MAX_CHAT {
            let excess = self.chat.len() - MAX_CHAT;
            self.chat.drain(..excess);
        }
        self.chat_scroll = 0;
        self.chat
            .last()
            .map(|m| m.text.as_str())
            .unwrap_or_default()
    }

    pub fn take_input(&mut self) -> Option<String> {
        let question = std::mem::take(&mut self.input);
        let trimmed = question.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub enum Delta {
    SetSnapshot(Snapshot),
    CacheInfo { enabled: bool, entries: usize },
    ExportFinished { path: String, rows: usize },
    Log(String),
}

#[derive(Debug, Clone)]
pub enum ProviderCommand {
    Refresh {
        competition: Competition,
    },
    SetCacheEnabled(bool),
    ClearCache,
    Export {
        path: String,
        competition: Competition,
        standings: Vec<StandingsEntry>,
    },
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetSnapshot(snapshot) => {
            // A refresh that lands after the user switched competition is stale.
            if snapshot.competition != state.competition {
                return;
            }
            state.source = snapshot.source;
            state.standings = snapshot.standings;
            state.upcoming = snapshot.upcoming;
            state.results = snapshot.results;
            state.scorers = snapshot.scorers;
            state.updated_at = Some(snapshot.updated_at);
            state.loading = false;
            if state.selected >= state.standings.len() {
                state.selected = state.standings.len().saturating_sub(1);
            }
        }
        Delta::CacheInfo { enabled, entries } => {
            state.cache_enabled = enabled;
            state.cache_entries = entries;
        }
        Delta::ExportFinished { path, rows } => {
            state.push_log(format!("[INFO] Exported {rows} rows to {path}"));
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}

pub fn source_label(source: DataSource) -> &'static str {
    match source {
        DataSource::Live => "LIVE",
        DataSource::Cached => "CACHE",
        DataSource::Demo => "DEMO",
    }
}

pub fn format_kickoff_fr(raw: &str) -> String {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return "Date à confirmer".to_string();
    }
    match parse_kickoff(cleaned) {
        Some(dt) => format!(
            "{} {:02} {} {:02}:{:02}",
            weekday_fr(dt.weekday()),
            dt.day(),
            month_fr(dt.month()),
            dt.hour(),
            dt.minute()
        ),
        None => cleaned.replace('T', " "),
    }
}

/// Parses an ISO-8601 kickoff ("Z" or explicit offset); naive timestamps are taken as UTC.
pub fn parse_kickoff(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    let utc = FixedOffset::east_opt(0)?;
    for fmt in FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return naive.and_local_timezone(utc).single();
        }
    }
    None
}

fn weekday_fr(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lundi",
        Weekday::Tue => "mardi",
        Weekday::Wed => "mercredi",
        Weekday::Thu => "jeudi",
        Weekday::Fri => "vendredi",
        Weekday::Sat => "samedi",
        Weekday::Sun => "dimanche",
    }
}

fn month_fr(month: u32) -> &'static str {
    match month {
        1 => "janvier",
        2 => "février",
        3 => "mars",
        4 => "avril",
        5 => "mai",
        6 => "juin",
        7 => "juillet",
        8 => "août",
        9 => "septembre",
        10 => "octobre",
        11 => "novembre",
        _ => "décembre",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kickoff_accepts_zulu_and_offset() {
        assert_eq!(
            format_kickoff_fr("2025-01-18T20:00:00Z"),
            "samedi 18 janvier 20:00"
        );
        assert_eq!(
            format_kickoff_fr("2025-01-19T16:45:00+01:00"),
            "dimanche 19 janvier 16:45"
        );
    }

    #[test]
    fn kickoff_falls_back_to_raw_text() {
        assert_eq!(format_kickoff_fr(""), "Date à confirmer");
        assert_eq!(format_kickoff_fr("bientôt"), "bientôt");
    }

    #[test]
    fn competition_codes_round_trip() {
        for c in Competition::ALL {
            assert_eq!(Competition::from_code(c.code()), Some(c));
        }
        assert_eq!(Competition::from_code("bl1"), Some(Competition::Bundesliga));
        assert_eq!(Competition::from_code("XX"), None);
        assert_eq!(Competition::SerieA.next(), Competition::Ligue1);
    }

    #[test]
    fn status_mapping() {
        assert!(FixtureStatus::from_api("TIMED").is_upcoming());
        assert!(FixtureStatus::from_api("scheduled").is_upcoming());
        assert_eq!(FixtureStatus::from_api("IN_PLAY"), FixtureStatus::InPlay);
        assert!(!FixtureStatus::from_api("PAUSED").is_upcoming());
        assert_eq!(FixtureStatus::from_api("weird"), FixtureStatus::Other);
    }
}
