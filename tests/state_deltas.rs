use rand::SeedableRng;
use rand::rngs::StdRng;

use football_dash::sample_data;
use football_dash::state::{
    AppState, ChatRole, Competition, DataSource, Delta, Screen, apply_delta,
};

fn demo_state(competition: Competition) -> AppState {
    let mut state = AppState::new();
    state.competition = competition;
    apply_delta(
        &mut state,
        Delta::SetSnapshot(sample_data::demo_snapshot(competition, "12:00:00".to_string())),
    );
    state
}

#[test]
fn snapshot_replaces_all_collections() {
    let mut state = AppState::new();
    state.loading = true;
    apply_delta(
        &mut state,
        Delta::SetSnapshot(sample_data::demo_snapshot(
            Competition::Ligue1,
            "10:00:00".to_string(),
        )),
    );
    assert!(!state.loading);
    assert_eq!(state.source, DataSource::Demo);
    assert_eq!(state.standings.len(), 10);
    assert_eq!(state.upcoming.len(), 5);
    assert_eq!(state.results.len(), 5);
    assert_eq!(state.scorers.len(), 5);
    assert_eq!(state.updated_at.as_deref(), Some("10:00:00"));
}

#[test]
fn snapshot_for_other_competition_is_ignored() {
    let mut state = demo_state(Competition::Ligue1);
    apply_delta(
        &mut state,
        Delta::SetSnapshot(sample_data::demo_snapshot(
            Competition::LaLiga,
            "11:00:00".to_string(),
        )),
    );
    assert_eq!(state.standings[0].team, "Paris SG");
    assert_eq!(state.updated_at.as_deref(), Some("12:00:00"));
}

#[test]
fn selection_is_clamped_to_new_table() {
    let mut state = demo_state(Competition::Ligue1);
    for _ in 0..20 {
        state.select_next();
    }
    assert_eq!(state.selected, 9);

    let mut snapshot = sample_data::demo_snapshot(Competition::Ligue1, "13:00:00".to_string());
    snapshot.standings.truncate(4);
    apply_delta(&mut state, Delta::SetSnapshot(snapshot));
    assert_eq!(state.selected, 3);
    assert_eq!(state.selected_team().map(|t| t.team.as_str()), Some("Monaco"));
}

#[test]
fn cycle_competition_clears_previous_data() {
    let mut state = demo_state(Competition::Ligue1);
    state.selected = 4;
    let next = state.cycle_competition();
    assert_eq!(next, Competition::PremierLeague);
    assert!(state.standings.is_empty());
    assert!(state.upcoming.is_empty());
    assert!(state.loading);
    assert_eq!(state.selected, 0);
}

#[test]
fn cache_info_and_logs() {
    let mut state = AppState::new();
    apply_delta(
        &mut state,
        Delta::CacheInfo {
            enabled: false,
            entries: 7,
        },
    );
    assert!(!state.cache_enabled);
    assert_eq!(state.cache_entries, 7);

    apply_delta(
        &mut state,
        Delta::ExportFinished {
            path: "out.xlsx".to_string(),
            rows: 10,
        },
    );
    for i in 0..250 {
        apply_delta(&mut state, Delta::Log(format!("[INFO] line {i}")));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.back().map(String::as_str), Some("[INFO] line 249"));
}

#[test]
fn chat_history_survives_refresh() {
    let mut state = demo_state(Competition::Ligue1);
    let reply = state.ask("Quel est le classement ?").to_string();
    assert!(reply.contains("Paris SG"));
    assert_eq!(state.chat.len(), 2);
    assert_eq!(state.chat[0].role, ChatRole::User);
    assert_eq!(state.chat[1].role, ChatRole::Assistant);

    apply_delta(
        &mut state,
        Delta::SetSnapshot(sample_data::demo_snapshot(
            Competition::Ligue1,
            "14:00:00".to_string(),
        )),
    );
    assert_eq!(state.chat.len(), 2);
}

#[test]
fn chat_history_is_bounded() {
    let mut state = demo_state(Competition::Ligue1);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..80 {
        state.ask_with_rng("???", &mut rng);
    }
    assert_eq!(state.chat.len(), 100);
    assert_eq!(state.chat[0].role, ChatRole::User);
}

#[test]
fn input_is_trimmed_and_consumed() {
    let mut state = AppState::new();
    state.input = "   ".to_string();
    assert_eq!(state.take_input(), None);
    state.input = "  bonjour ".to_string();
    assert_eq!(state.take_input().as_deref(), Some("bonjour"));
    assert!(state.input.is_empty());
}

#[test]
fn screens_wrap_around() {
    assert_eq!(Screen::Assistant.next(), Screen::Standings);
    assert_eq!(Screen::Standings.prev(), Screen::Assistant);
    assert_eq!(Screen::ALL.len(), 6);
}
