//! Bundled demo data, used when no API key is configured or the API is unreachable.

use crate::state::{Competition, DataSource, Fixture, FixtureStatus, Scorer, Snapshot, StandingsEntry};

const DEMO_PLAYED: u32 = 19;
const DEMO_GOALS_FOR: [u32; 10] = [45, 38, 35, 32, 30, 28, 27, 26, 25, 24];
const DEMO_GOALS_AGAINST: [u32; 10] = [15, 18, 20, 22, 25, 26, 28, 29, 30, 32];

// (team, won, draw, lost, form)
type DemoRow = (&'static str, u32, u32, u32, &'static str);

const LIGUE1: [DemoRow; 10] = [
    ("Paris SG", 13, 5, 1, "WWDWW"),
    ("Lens", 12, 4, 3, "WLWWD"),
    ("Marseille", 11, 6, 2, "DWWLW"),
    ("Monaco", 10, 7, 2, "WDDWL"),
    ("Rennes", 9, 7, 3, "LWDWW"),
    ("Lille", 8, 8, 3, "DDWLW"),
    ("Nice", 8, 7, 4, "WLDLW"),
    ("Lorient", 7, 9, 3, "DDLWD"),
    ("Reims", 7, 8, 4, "LDWDL"),
    ("Lyon", 6, 10, 3, "DDLDW"),
];

const PREMIER_LEAGUE: [DemoRow; 10] = [
    ("Manchester City", 14, 3, 2, "WWWDW"),
    ("Arsenal", 13, 4, 2, "WDWWW"),
    ("Manchester Utd", 13, 3, 3, "WWLWD"),
    ("Liverpool", 12, 4, 3, "DWWLW"),
    ("Chelsea", 11, 5, 3, "WDLWD"),
    ("Tottenham", 11, 4, 4, "LWWDL"),
    ("Newcastle", 10, 5, 4, "DLWWD"),
    ("Aston Villa", 9, 6, 4, "WDDLW"),
    ("Brighton", 9, 5, 5, "LDWLW"),
    ("Fulham", 8, 7, 4, "DDLWD"),
];

const LA_LIGA: [DemoRow; 10] = [
    ("Barcelona", 15, 2, 2, "WWWWD"),
    ("Real Madrid", 14, 3, 2, "WWDWW"),
    ("Atlético Madrid", 12, 6, 1, "DWWDW"),
    ("Sevilla", 11, 5, 3, "WLDWW"),
    ("Real Sociedad", 10, 7, 2, "DDWWL"),
    ("Villarreal", 10, 5, 4, "WLWDL"),
    ("Betis", 9, 7, 3, "DWDLW"),
    ("Valencia", 9, 5, 5, "LWLDW"),
    ("Athletic Bilbao", 8, 7, 4, "DDWLD"),
    ("Osasuna", 8, 6, 5, "LDDWL"),
];

/// Demo table for a competition; competitions without bundled data use Ligue 1.
pub fn demo_standings(competition: Competition) -> Vec<StandingsEntry> {
    let rows: &[DemoRow] = match competition {
        Competition::PremierLeague => &PREMIER_LEAGUE,
        Competition::LaLiga => &LA_LIGA,
        _ => &LIGUE1,
    };

    rows.iter()
        .enumerate()
        .map(|(idx, (team, won, draw, lost, form))| {
            let goals_for = DEMO_GOALS_FOR[idx];
            let goals_against = DEMO_GOALS_AGAINST[idx];
            StandingsEntry {
                position: idx as u32 + 1,
                team: team.to_string(),
                short_name: short_name(team),
                played: DEMO_PLAYED,
                won: *won,
                draw: *draw,
                lost: *lost,
                goals_for,
                goals_against,
                goal_difference: goals_for as i32 - goals_against as i32,
                points: won * 3 + draw,
                form: form.to_string(),
            }
        })
        .collect()
}

pub fn demo_upcoming(competition: Competition) -> Vec<Fixture> {
    let table = demo_standings(competition);
    let pairs = [(0usize, 2usize), (1, 3), (4, 5), (6, 9), (7, 8)];
    let kickoffs = [
        "2025-01-24T19:45:00Z",
        "2025-01-25T16:00:00Z",
        "2025-01-25T18:00:00Z",
        "2025-01-26T14:00:00Z",
        "2025-01-26T19:45:00Z",
    ];

    pairs
        .iter()
        .zip(kickoffs)
        .enumerate()
        .map(|(i, ((h, a), kickoff))| Fixture {
            id: 9_000 + i as u64,
            home: table[*h].team.clone(),
            away: table[*a].team.clone(),
            kickoff: kickoff.to_string(),
            competition: competition.label().to_string(),
            matchday: Some(DEMO_PLAYED + 1),
            status: FixtureStatus::Timed,
            score_home: None,
            score_away: None,
        })
        .collect()
}

pub fn demo_results(competition: Competition) -> Vec<Fixture> {
    let table = demo_standings(competition);
    let games = [
        (2usize, 0usize, 1u32, 1u32),
        (3, 1, 2, 0),
        (5, 4, 1, 3),
        (9, 6, 0, 0),
        (8, 7, 2, 1),
    ];
    let kickoffs = [
        "2025-01-17T19:45:00Z",
        "2025-01-18T16:00:00Z",
        "2025-01-18T18:00:00Z",
        "2025-01-19T14:00:00Z",
        "2025-01-19T19:45:00Z",
    ];

    games
        .iter()
        .zip(kickoffs)
        .enumerate()
        .map(|(i, ((h, a, sh, sa), kickoff))| Fixture {
            id: 8_000 + i as u64,
            home: table[*h].team.clone(),
            away: table[*a].team.clone(),
            kickoff: kickoff.to_string(),
            competition: competition.label().to_string(),
            matchday: Some(DEMO_PLAYED),
            status: FixtureStatus::Finished,
            score_home: Some(*sh),
            score_away: Some(*sa),
        })
        .collect()
}

pub fn demo_scorers(competition: Competition) -> Vec<Scorer> {
    let players: [(&str, &str, u32, u32); 5] = match competition {
        Competition::PremierLeague => [
            ("E. Haaland", "Manchester City", 17, 3),
            ("M. Salah", "Liverpool", 14, 8),
            ("B. Saka", "Arsenal", 11, 7),
            ("M. Rashford", "Manchester Utd", 10, 4),
            ("A. Isak", "Newcastle", 9, 2),
        ],
        Competition::LaLiga => [
            ("R. Lewandowski", "Barcelona", 16, 4),
            ("Vinícius Jr.", "Real Madrid", 12, 6),
            ("A. Griezmann", "Atlético Madrid", 11, 7),
            ("Y. En-Nesyri", "Sevilla", 9, 1),
            ("T. Kubo", "Real Sociedad", 7, 5),
        ],
        _ => [
            ("K. Mbappé", "Paris SG", 18, 6),
            ("J. David", "Lille", 13, 3),
            ("A. Sanchez", "Marseille", 11, 4),
            ("W. Ben Yedder", "Monaco", 10, 2),
            ("L. Openda", "Lens", 9, 3),
        ],
    };

    players
        .iter()
        .map(|(player, team, goals, assists)| Scorer {
            player: player.to_string(),
            team: team.to_string(),
            goals: *goals,
            assists: Some(*assists),
            penalties: None,
            played: Some(DEMO_PLAYED),
        })
        .collect()
}

pub fn demo_snapshot(competition: Competition, updated_at: String) -> Snapshot {
    Snapshot {
        competition,
        source: DataSource::Demo,
        standings: demo_standings(competition),
        upcoming: demo_upcoming(competition),
        results: demo_results(competition),
        scorers: demo_scorers(competition),
        updated_at,
    }
}

fn short_name(team: &str) -> String {
    team.chars()
        .filter(|c| c.is_alphabetic())
        .take(3)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_tables_are_consistent() {
        for competition in Competition::ALL {
            let table = demo_standings(competition);
            assert_eq!(table.len(), 10);
            for (idx, row) in table.iter().enumerate() {
                assert_eq!(row.position, idx as u32 + 1);
                assert_eq!(row.won + row.draw + row.lost, row.played);
                assert_eq!(
                    row.goal_difference,
                    row.goals_for as i32 - row.goals_against as i32
                );
            }
            // Ordered by points.
            assert!(table.windows(2).all(|w| w[0].points >= w[1].points));
        }
    }

    #[test]
    fn unbundled_competitions_fall_back_to_ligue1() {
        assert_eq!(
            demo_standings(Competition::SerieA),
            demo_standings(Competition::Ligue1)
        );
        assert_eq!(demo_standings(Competition::Ligue1)[0].points, 44);
    }

    #[test]
    fn demo_fixtures_use_table_teams() {
        let upcoming = demo_upcoming(Competition::PremierLeague);
        assert!(upcoming.iter().all(|f| f.status.is_upcoming()));
        assert_eq!(upcoming[0].home, "Manchester City");
        let results = demo_results(Competition::LaLiga);
        assert!(results.iter().all(|f| f.score_home.is_some()));
    }
}
