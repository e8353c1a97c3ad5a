use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use football_dash::state::StandingsEntry;
use football_dash::stats;
use football_dash::win_prob::{self, HomeBonus, PredictorConfig};

#[derive(Debug, serde::Deserialize)]
struct PredictCase {
    team_a: StandingsEntry,
    team_b: StandingsEntry,
    #[serde(default = "default_home")]
    home_advantage: bool,
    /// "relative" (default) or "flat".
    #[serde(default)]
    home_bonus: Option<String>,
}

fn default_home() -> bool {
    true
}

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/predict_case.json"));

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let case: PredictCase = serde_json::from_str(&raw).context("invalid predict case")?;

    let cfg = match case.home_bonus.as_deref() {
        Some("flat") => PredictorConfig {
            home_bonus: HomeBonus::Flat(0.10),
        },
        _ => PredictorConfig::default(),
    };

    let a = stats::normalize(&case.team_a);
    let b = stats::normalize(&case.team_b);
    let result = win_prob::predict_with(&cfg, &a, &b, case.home_advantage);

    println!("{}: {:?}", case.team_a.team, a);
    println!("{}: {:?}", case.team_b.team, b);
    println!("Home bonus: {:?} (applied: {})", cfg.home_bonus, case.home_advantage);
    println!();
    println!("{} win: {:.1}%", case.team_a.team, result.team_a);
    println!("Draw: {:.1}%", result.draw);
    println!("{} win: {:.1}%", case.team_b.team, result.team_b);
    println!("Verdict: {}", result.verdict.label());

    Ok(())
}
