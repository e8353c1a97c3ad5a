use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use football_dash::assistant::{
    FALLBACK_QUESTIONS, Intent, NO_DATA_MESSAGE, answer, answer_with_rng, classify,
};
use football_dash::football_data::parse_standings_json;
use football_dash::sample_data;
use football_dash::state::{Competition, Fixture, FixtureStatus, StandingsEntry};

fn entry(position: u32, team: &str, won: u32, draw: u32, lost: u32, form: &str) -> StandingsEntry {
    let goals_for = 20 + won * 2;
    let goals_against = 10 + lost * 2;
    StandingsEntry {
        position,
        team: team.to_string(),
        short_name: String::new(),
        played: won + draw + lost,
        won,
        draw,
        lost,
        goals_for,
        goals_against,
        goal_difference: goals_for as i32 - goals_against as i32,
        points: won * 3 + draw,
        form: form.to_string(),
    }
}

fn live_ligue1() -> Vec<StandingsEntry> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("standings_fl1.json");
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    parse_standings_json(&raw).expect("fixture should parse")
}

fn percentages(text: &str) -> Vec<f64> {
    text.split_whitespace()
        .filter_map(|w| w.strip_suffix('%'))
        .filter_map(|n| n.parse::<f64>().ok())
        .collect()
}

#[test]
fn standings_lists_five_teams_in_order() {
    let table = vec![
        entry(1, "Paris SG", 13, 5, 1, "WWDWW"),
        entry(2, "Lens", 12, 4, 3, "WLWWD"),
        entry(3, "Marseille", 11, 6, 2, "DWWLW"),
        entry(4, "Monaco", 10, 7, 2, "WDDWL"),
        entry(5, "Rennes", 9, 7, 3, "LWDWW"),
    ];
    let reply = answer("Quel est le classement ?", &table, None);

    let positions: Vec<usize> = table
        .iter()
        .map(|t| reply.find(&t.team).expect("team listed"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{reply}");
}

#[test]
fn head_to_head_prediction_has_three_shares() {
    let table = vec![
        entry(1, "Paris SG", 13, 5, 1, "WWDWW"),
        entry(2, "Marseille", 11, 6, 2, "DWWLW"),
    ];
    let reply = answer("Qui va gagner entre Paris SG et Marseille ?", &table, None);
    assert!(reply.contains("Paris SG"));
    assert!(reply.contains("Marseille"));

    let shares = percentages(&reply);
    assert_eq!(shares.len(), 3, "{reply}");
    let sum: f64 = shares.iter().sum();
    assert!((sum - 100.0).abs() <= 0.1, "sum was {sum}");
}

#[test]
fn prediction_treats_first_team_as_home() {
    let table = sample_data::demo_standings(Competition::Ligue1);
    let reply = answer("pronostic entre Lyon et Paris", &table, None);
    assert!(reply.contains("Lyon vs Paris SG"), "{reply}");
    assert!(reply.contains("avantage du terrain pour Lyon"));
}

#[test]
fn gibberish_gets_fallback_suggestions() {
    let mut rng = StdRng::seed_from_u64(42);
    let reply = answer_with_rng("xqzv wplk", &[], None, &mut rng);
    assert_eq!(classify("xqzv wplk"), Intent::Fallback);
    let suggested = FALLBACK_QUESTIONS
        .iter()
        .filter(|q| reply.contains(*q))
        .count();
    assert_eq!(suggested, 3);
}

#[test]
fn empty_standings_give_no_data_message() {
    assert_eq!(answer("classement", &[], None), NO_DATA_MESSAGE);
}

#[test]
fn fixtures_show_at_most_three_upcoming() {
    let mut fixtures = sample_data::demo_upcoming(Competition::Ligue1);
    fixtures.push(Fixture {
        id: 1,
        home: "Finished FC".to_string(),
        away: "Done United".to_string(),
        kickoff: "2025-01-10T20:00:00Z".to_string(),
        competition: "Ligue 1".to_string(),
        matchday: Some(18),
        status: FixtureStatus::Finished,
        score_home: Some(1),
        score_away: Some(0),
    });
    fixtures.rotate_right(1);

    let reply = answer("Quels sont les prochains matchs ?", &[], Some(fixtures.as_slice()));
    assert!(!reply.contains("Finished FC"));
    assert_eq!(reply.lines().filter(|l| l.starts_with('•')).count(), 3);
    assert!(reply.contains("vendredi 24 janvier 19:45"));
}

#[test]
fn fixtures_without_data_suggest_questions() {
    let reply = answer("calendrier", &[], None);
    assert!(reply.contains("Pas de données de matchs"));
    let reply = answer("calendrier", &[], Some(&[][..]));
    assert!(reply.contains("Pas de données de matchs"));
}

#[test]
fn greeting_and_help() {
    assert!(answer("Bonjour", &[], None).starts_with("Bonjour"));
    assert!(answer("que peux-tu faire", &[], None).contains("Voici ce que je sais faire"));
}

#[test]
fn form_with_empty_history_shows_unknown_markers() {
    let table = vec![entry(1, "Nantes", 5, 5, 5, "")];
    let reply = answer("forme de Nantes", &table, None);
    assert!(reply.contains("⚪⚪⚪⚪⚪"), "{reply}");
}

#[test]
fn prediction_resolves_api_short_names() {
    let table = live_ligue1();
    let reply = answer("Qui va gagner entre Paris SG et Marseille ?", &table, None);
    assert!(
        reply.contains("Paris Saint-Germain FC vs Olympique de Marseille"),
        "{reply}"
    );
    let shares = percentages(&reply);
    assert_eq!(shares.len(), 3, "{reply}");
    let sum: f64 = shares.iter().sum();
    assert!((sum - 100.0).abs() <= 0.1, "sum was {sum}");
}

#[test]
fn form_ignores_short_words_in_club_names() {
    let table = live_ligue1();
    let reply = answer("Quelle est la forme de Lens ?", &table, None);
    assert!(reply.contains("Forme de Racing Club de Lens"), "{reply}");
    assert!(reply.contains("🟢🔴🟢🟢🟡"), "{reply}");
    assert!(reply.contains("Position : 2"));

    let reply = answer("forme de Marseille", &table, None);
    assert!(reply.contains("Forme de Olympique de Marseille"), "{reply}");
    assert!(reply.contains("Position : 3"));
}
