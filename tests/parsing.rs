use std::fs;
use std::path::PathBuf;

use football_dash::football_data::{
    parse_matches_json, parse_scorers_json, parse_standings_json,
};
use football_dash::state::FixtureStatus;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn standings_use_total_table_sorted_by_position() {
    let raw = read_fixture("standings_fl1.json");
    let rows = parse_standings_json(&raw).expect("fixture should parse");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].team, "Paris Saint-Germain FC");
    assert_eq!(rows[0].short_name, "PSG");
    assert_eq!(rows[0].points, 44);
    assert_eq!(rows[0].goal_difference, 30);
    assert_eq!(rows[1].team, "Racing Club de Lens");
    assert_eq!(rows[1].played, 19);
    assert_eq!(rows[1].short_name, "RC Lens");
    assert_eq!(rows[2].short_name, "Marseille");
}

#[test]
fn standings_form_separators_are_stripped() {
    let raw = read_fixture("standings_fl1.json");
    let rows = parse_standings_json(&raw).expect("fixture should parse");
    assert_eq!(rows[0].form, "WWDWW");
    assert_eq!(rows[1].form, "WLWWD");
    // null form
    assert_eq!(rows[2].form, "");
}

#[test]
fn scheduled_matches_map_status_and_competition() {
    let raw = read_fixture("matches_scheduled.json");
    let fixtures = parse_matches_json(&raw).expect("fixture should parse");
    assert_eq!(fixtures.len(), 2);
    assert_eq!(fixtures[0].id, 498001);
    assert_eq!(fixtures[0].home, "RC Lens");
    assert_eq!(fixtures[0].away, "Monaco");
    assert_eq!(fixtures[0].status, FixtureStatus::Timed);
    assert_eq!(fixtures[1].status, FixtureStatus::Scheduled);
    assert!(fixtures.iter().all(|f| f.status.is_upcoming()));
    assert_eq!(fixtures[0].matchday, Some(20));
    assert_eq!(fixtures[0].competition, "Ligue 1");
    assert_eq!(fixtures[0].score_home, None);
    assert_eq!(fixtures[0].kickoff_label(), "samedi 25 janvier 16:00");
}

#[test]
fn finished_matches_carry_scores() {
    let raw = read_fixture("matches_finished.json");
    let fixtures = parse_matches_json(&raw).expect("fixture should parse");
    assert_eq!(fixtures.len(), 2);
    assert_eq!(fixtures[0].status, FixtureStatus::Finished);
    assert_eq!(fixtures[0].score_label(), "1 - 1");
    assert_eq!(fixtures[0].date_label(), "18/01/2025");
    assert_eq!(fixtures[1].status, FixtureStatus::Postponed);
    // Falls back to the full name when shortName is null.
    assert_eq!(fixtures[1].home, "Lille OSC");
    assert_eq!(fixtures[1].score_label(), "-");
}

#[test]
fn scorers_keep_optional_figures() {
    let raw = read_fixture("scorers.json");
    let scorers = parse_scorers_json(&raw).expect("fixture should parse");
    assert_eq!(scorers.len(), 2);
    assert_eq!(scorers[0].player, "Kylian Mbappé");
    assert_eq!(scorers[0].team, "PSG");
    assert_eq!(scorers[0].goals, 18);
    assert_eq!(scorers[0].assists, Some(6));
    assert_eq!(scorers[0].played, Some(18));
    assert_eq!(scorers[1].assists, None);
    assert_eq!(scorers[1].penalties, None);
}

#[test]
fn null_bodies_are_empty() {
    assert!(parse_standings_json("null").expect("null should parse").is_empty());
    assert!(parse_matches_json("null").expect("null should parse").is_empty());
    assert!(parse_scorers_json("null").expect("null should parse").is_empty());
}
