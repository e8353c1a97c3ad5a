use crate::stats::NormalizedStats;

const W_POINTS: f64 = 0.30;
const W_WIN_RATE: f64 = 0.25;
const W_GOALS_FOR: f64 = 0.20;
const W_GOALS_AGAINST: f64 = 0.15;
const W_FORM: f64 = 0.10;

const HOME_BONUS: f64 = 0.10;

const DRAW_BASE: f64 = 25.0;
const DRAW_SHIFT: f64 = 10.0;
const TIGHT_DEFENSE: f64 = 1.0;
const LEAKY_DEFENSE: f64 = 2.0;
// Used when a goals-against figure is unusable (NaN/inf).
const DEFAULT_GOALS_AGAINST: f64 = 1.5;

const FAVORITE_MARGIN: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HomeBonus {
    /// Added to team A's weighted score as-is.
    Flat(f64),
    /// Team A's weighted score is scaled by `1 + bonus`.
    Relative(f64),
}

#[derive(Debug, Clone, Copy)]
pub struct PredictorConfig {
    pub home_bonus: HomeBonus,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            home_bonus: HomeBonus::Relative(HOME_BONUS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    TeamAFavored,
    TeamBFavored,
    Close,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::TeamAFavored => "Team A favored",
            Verdict::TeamBFavored => "Team B favored",
            Verdict::Close => "close match, draw possible",
        }
    }
}

/// Three-way outcome in percent, one decimal each, summing to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub team_a: f64,
    pub draw: f64,
    pub team_b: f64,
    pub verdict: Verdict,
}

pub fn predict(a: &NormalizedStats, b: &NormalizedStats, home_advantage: bool) -> PredictionResult {
    predict_with(&PredictorConfig::default(), a, b, home_advantage)
}

pub fn predict_with(
    cfg: &PredictorConfig,
    a: &NormalizedStats,
    b: &NormalizedStats,
    home_advantage: bool,
) -> PredictionResult {
    let mut score_a = weighted_score(a);
    let score_b = weighted_score(b);
    if home_advantage {
        score_a = match cfg.home_bonus {
            HomeBonus::Flat(bonus) => score_a + bonus,
            HomeBonus::Relative(bonus) => score_a * (1.0 + bonus),
        };
    }

    // Negative scores would produce negative shares.
    let score_a = finite_or_zero(score_a).max(0.0);
    let score_b = finite_or_zero(score_b).max(0.0);

    let total = score_a + score_b;
    let (p_a, p_b) = if total > 0.0 {
        (score_a / total * 100.0, score_b / total * 100.0)
    } else {
        (50.0, 50.0)
    };

    let draw = draw_probability(a.goals_against_per_match, b.goals_against_per_match);
    let remaining = 100.0 - draw;
    let (final_a, _) = if p_a + p_b > 0.0 {
        (p_a / (p_a + p_b) * remaining, p_b / (p_a + p_b) * remaining)
    } else {
        (remaining / 2.0, remaining / 2.0)
    };

    let team_a = round1(final_a);
    let draw = round1(draw);
    // Put the rounding residue into team B so the row sums to exactly 100.
    let team_b = round1(100.0 - draw - team_a).max(0.0);

    PredictionResult {
        team_a,
        draw,
        team_b,
        verdict: verdict(team_a, team_b),
    }
}

pub fn weighted_score(s: &NormalizedStats) -> f64 {
    s.points * W_POINTS + s.win_rate * W_WIN_RATE + s.goals_for_per_match * W_GOALS_FOR
        - s.goals_against_per_match * W_GOALS_AGAINST
        + s.form_score * W_FORM
}

/// Draw share before redistribution: 25, shifted by how leaky both defenses are.
pub fn draw_probability(goals_against_a: f64, goals_against_b: f64) -> f64 {
    let ga_a = if goals_against_a.is_finite() {
        goals_against_a
    } else {
        DEFAULT_GOALS_AGAINST
    };
    let ga_b = if goals_against_b.is_finite() {
        goals_against_b
    } else {
        DEFAULT_GOALS_AGAINST
    };
    let avg_defense = (ga_a + ga_b) / 2.0;

    let mut draw = DRAW_BASE;
    if avg_defense < TIGHT_DEFENSE {
        draw += DRAW_SHIFT;
    } else if avg_defense > LEAKY_DEFENSE {
        draw -= DRAW_SHIFT;
    }
    draw
}

fn verdict(team_a: f64, team_b: f64) -> Verdict {
    if team_a > team_b + FAVORITE_MARGIN {
        Verdict::TeamAFavored
    } else if team_b > team_a + FAVORITE_MARGIN {
        Verdict::TeamBFavored
    } else {
        Verdict::Close
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
