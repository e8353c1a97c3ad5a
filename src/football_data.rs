//! football-data.org v4 client: standings, matches and top scorers.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::http_cache::{CacheOrigin, CachePolicy, fetch_json_cached};
use crate::http_client::http_client;
use crate::state::{Fixture, FixtureStatus, Scorer, StandingsEntry};

const API_BASE: &str = "https://api.football-data.org/v4";
const AUTH_HEADER: &str = "X-Auth-Token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatusFilter {
    Scheduled,
    Finished,
}

impl MatchStatusFilter {
    fn query_value(self) -> &'static str {
        match self {
            MatchStatusFilter::Scheduled => "SCHEDULED,TIMED",
            MatchStatusFilter::Finished => "FINISHED",
        }
    }
}

/// Parsed payload plus where its body came from.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub origin: CacheOrigin,
}

pub fn fetch_standings(
    code: &str,
    api_key: &str,
    policy: &CachePolicy,
) -> Result<Fetched<Vec<StandingsEntry>>> {
    let url = format!("{API_BASE}/competitions/{code}/standings");
    let (body, origin) = get(&url, api_key, policy)?;
    Ok(Fetched {
        data: parse_standings_json(&body)?,
        origin,
    })
}

pub fn fetch_matches(
    code: &str,
    status: MatchStatusFilter,
    limit: u32,
    api_key: &str,
    policy: &CachePolicy,
) -> Result<Fetched<Vec<Fixture>>> {
    let url = format!(
        "{API_BASE}/competitions/{code}/matches?status={}&limit={limit}",
        status.query_value()
    );
    let (body, origin) = get(&url, api_key, policy)?;
    let mut fixtures = parse_matches_json(&body)?;
    match status {
        MatchStatusFilter::Scheduled => fixtures.sort_by(|a, b| a.kickoff.cmp(&b.kickoff)),
        // Most recent first.
        MatchStatusFilter::Finished => fixtures.sort_by(|a, b| b.kickoff.cmp(&a.kickoff)),
    }
    fixtures.truncate(limit as usize);
    Ok(Fetched {
        data: fixtures,
        origin,
    })
}

pub fn fetch_scorers(
    code: &str,
    limit: u32,
    api_key: &str,
    policy: &CachePolicy,
) -> Result<Fetched<Vec<Scorer>>> {
    let url = format!("{API_BASE}/competitions/{code}/scorers?limit={limit}");
    let (body, origin) = get(&url, api_key, policy)?;
    Ok(Fetched {
        data: parse_scorers_json(&body)?,
        origin,
    })
}

fn get(url: &str, api_key: &str, policy: &CachePolicy) -> Result<(String, CacheOrigin)> {
    let client = http_client()?;
    let cached = fetch_json_cached(client, url, &[(AUTH_HEADER, api_key)], policy)
        .with_context(|| format!("GET {url}"))?;
    Ok((cached.body, cached.origin))
}

#[derive(Debug, Deserialize)]
struct StandingsResponse {
    #[serde(default)]
    standings: Vec<StandingsGroup>,
}

#[derive(Debug, Deserialize)]
struct StandingsGroup {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    table: Vec<TableRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableRow {
    position: u32,
    team: ApiTeam,
    played_games: u32,
    #[serde(default)]
    form: Option<String>,
    won: u32,
    draw: u32,
    lost: u32,
    points: u32,
    goals_for: u32,
    goals_against: u32,
    goal_difference: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiTeam {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    tla: Option<String>,
}

impl ApiTeam {
    fn full_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.short_name.clone())
            .unwrap_or_else(|| "?".to_string())
    }

    fn display_name(&self) -> String {
        self.short_name
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Rows of the `TOTAL` table; home/away splits are ignored.
pub fn parse_standings_json(raw: &str) -> Result<Vec<StandingsEntry>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let resp: StandingsResponse =
        serde_json::from_str(trimmed).context("invalid standings json")?;

    let Some(total) = resp.standings.into_iter().find(|g| g.kind == "TOTAL") else {
        return Ok(Vec::new());
    };

    let mut rows: Vec<StandingsEntry> = total
        .table
        .into_iter()
        .map(|row| StandingsEntry {
            position: row.position,
            short_name: row
                .team
                .short_name
                .clone()
                .or_else(|| row.team.tla.clone())
                .unwrap_or_default(),
            team: row.team.full_name(),
            played: row.played_games,
            won: row.won,
            draw: row.draw,
            lost: row.lost,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
            goal_difference: row.goal_difference,
            points: row.points,
            form: clean_form(row.form.as_deref().unwrap_or_default()),
        })
        .collect();
    rows.sort_by_key(|r| r.position);
    Ok(rows)
}

/// "W,D,L" -> "WDL".
pub fn clean_form(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[derive(Debug, Deserialize)]
struct MatchesResponse {
    #[serde(default)]
    matches: Vec<ApiMatch>,
    #[serde(default)]
    competition: Option<ApiCompetition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMatch {
    id: u64,
    #[serde(default)]
    utc_date: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    matchday: Option<u32>,
    home_team: ApiTeam,
    away_team: ApiTeam,
    #[serde(default)]
    score: Option<ApiScore>,
    #[serde(default)]
    competition: Option<ApiCompetition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiScore {
    #[serde(default)]
    full_time: Option<ApiScoreLine>,
}

#[derive(Debug, Deserialize)]
struct ApiScoreLine {
    home: Option<u32>,
    away: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiCompetition {
    #[serde(default)]
    name: Option<String>,
}

pub fn parse_matches_json(raw: &str) -> Result<Vec<Fixture>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let resp: MatchesResponse = serde_json::from_str(trimmed).context("invalid matches json")?;
    let fallback_competition = resp
        .competition
        .and_then(|c| c.name)
        .unwrap_or_default();

    Ok(resp
        .matches
        .into_iter()
        .map(|m| {
            let full_time = m.score.and_then(|s| s.full_time);
            Fixture {
                id: m.id,
                home: m.home_team.display_name(),
                away: m.away_team.display_name(),
                kickoff: m.utc_date.unwrap_or_default(),
                competition: m
                    .competition
                    .and_then(|c| c.name)
                    .unwrap_or_else(|| fallback_competition.clone()),
                matchday: m.matchday,
                status: m
                    .status
                    .as_deref()
                    .map(FixtureStatus::from_api)
                    .unwrap_or(FixtureStatus::Other),
                score_home: full_time.as_ref().and_then(|s| s.home),
                score_away: full_time.as_ref().and_then(|s| s.away),
            }
        })
        .collect())
}

#[derive(Debug, Deserialize)]
struct ScorersResponse {
    #[serde(default)]
    scorers: Vec<ApiScorer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiScorer {
    player: ApiPlayer,
    team: ApiTeam,
    #[serde(default)]
    played_matches: Option<u32>,
    #[serde(default)]
    goals: Option<u32>,
    #[serde(default)]
    assists: Option<u32>,
    #[serde(default)]
    penalties: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiPlayer {
    name: String,
}

pub fn parse_scorers_json(raw: &str) -> Result<Vec<Scorer>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let resp: ScorersResponse = serde_json::from_str(trimmed).context("invalid scorers json")?;
    Ok(resp
        .scorers
        .into_iter()
        .map(|s| Scorer {
            player: s.player.name,
            team: s.team.display_name(),
            goals: s.goals.unwrap_or(0),
            assists: s.assists,
            penalties: s.penalties,
            played: s.played_matches,
        })
        .collect())
}
