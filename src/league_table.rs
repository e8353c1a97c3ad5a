//! League-wide figures derived from a standings snapshot: the metrics panel,
//! qualification zones and form markers.

use crate::state::StandingsEntry;
use crate::stats::{self, FORM_WINDOW};

#[derive(Debug, Clone, PartialEq)]
pub struct LeagueMetrics {
    pub teams: usize,
    pub avg_points: f64,
    pub total_goals: u32,
    pub best_attack: String,
    pub best_defense: String,
    pub best_goal_difference: String,
    pub win_pct: f64,
    pub total_draws: u32,
    pub total_played: u32,
}

impl LeagueMetrics {
    pub fn compute(table: &[StandingsEntry]) -> Option<Self> {
        let first = table.first()?;

        let mut best_attack = first;
        let mut best_defense = first;
        let mut best_diff = first;
        let mut points = 0u32;
        let mut goals = 0u32;
        let mut won = 0u32;
        let mut draws = 0u32;
        let mut played = 0u32;

        for row in table {
            // Strict comparisons keep the higher-placed team on ties.
            if row.goals_for > best_attack.goals_for {
                best_attack = row;
            }
            if row.goals_against < best_defense.goals_against {
                best_defense = row;
            }
            if row.goal_difference > best_diff.goal_difference {
                best_diff = row;
            }
            points += row.points;
            goals += row.goals_for + row.goals_against;
            won += row.won;
            draws += row.draw;
            played += row.played;
        }

        let win_pct = if played == 0 {
            0.0
        } else {
            won as f64 / played as f64 * 100.0
        };

        Some(Self {
            teams: table.len(),
            avg_points: points as f64 / table.len() as f64,
            total_goals: goals,
            best_attack: best_attack.team.clone(),
            best_defense: best_defense.team.clone(),
            best_goal_difference: best_diff.team.clone(),
            win_pct,
            total_draws: draws,
            total_played: played,
        })
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Moyenne points", format!("{:.1}", self.avg_points)),
            ("Total buts", self.total_goals.to_string()),
            ("Meilleure attaque", self.best_attack.clone()),
            ("Meilleure défense", self.best_defense.clone()),
            ("Meilleure diff.", self.best_goal_difference.clone()),
            ("% victoires", format!("{:.1}%", self.win_pct)),
            ("Matchs nuls", self.total_draws.to_string()),
            ("Matchs joués", self.total_played.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    ChampionsLeague,
    EuropaLeague,
    Relegation,
    None,
}

impl Zone {
    pub fn for_position(position: u32, table_len: usize) -> Self {
        let len = table_len as u32;
        if position <= 4 {
            Zone::ChampionsLeague
        } else if position <= 6 {
            Zone::EuropaLeague
        } else if len > 0 && position >= len.saturating_sub(3) {
            Zone::Relegation
        } else {
            Zone::None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::ChampionsLeague => "Ligue des Champions",
            Zone::EuropaLeague => "Ligue Europa",
            Zone::Relegation => "Relégation",
            Zone::None => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMark {
    Win,
    Draw,
    Loss,
    Unknown,
}

impl FormMark {
    pub fn from_char(c: char) -> Self {
        match c {
            'W' => FormMark::Win,
            'D' => FormMark::Draw,
            'L' => FormMark::Loss,
            _ => FormMark::Unknown,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            FormMark::Win => "🟢",
            FormMark::Draw => "🟡",
            FormMark::Loss => "🔴",
            FormMark::Unknown => "⚪",
        }
    }
}

/// Last five results; an empty form renders as five unknown marks.
pub fn form_markers(form: &str) -> Vec<FormMark> {
    let chars: Vec<char> = form.chars().collect();
    if chars.is_empty() {
        return vec![FormMark::Unknown; FORM_WINDOW];
    }
    chars[chars.len().saturating_sub(FORM_WINDOW)..]
        .iter()
        .map(|c| FormMark::from_char(*c))
        .collect()
}

pub fn form_emoji(form: &str) -> String {
    form_markers(form).into_iter().map(FormMark::emoji).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamRates {
    pub team: String,
    pub position: u32,
    pub goals_for_per_match: f64,
    pub goals_against_per_match: f64,
    pub win_rate: f64,
}

pub fn team_rates(table: &[StandingsEntry]) -> Vec<TeamRates> {
    table
        .iter()
        .map(|row| {
            let s = stats::normalize(row);
            TeamRates {
                team: row.team.clone(),
                position: row.position,
                goals_for_per_match: s.goals_for_per_match,
                goals_against_per_match: s.goals_against_per_match,
                win_rate: s.win_rate,
            }
        })
        .collect()
}
