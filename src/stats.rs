use crate::state::StandingsEntry;

/// Recent results considered by the form score.
pub const FORM_WINDOW: usize = 5;

/// Per-team figures fed to the match predictor, derived from one standings row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedStats {
    pub points: f64,
    pub win_rate: f64,
    pub goals_for_per_match: f64,
    pub goals_against_per_match: f64,
    pub form_score: f64,
}

pub fn normalize(entry: &StandingsEntry) -> NormalizedStats {
    let played = entry.played as f64;
    let per_match = |value: u32| {
        if entry.played == 0 {
            0.0
        } else {
            value as f64 / played
        }
    };

    NormalizedStats {
        points: entry.points as f64,
        win_rate: per_match(entry.won) * 100.0,
        goals_for_per_match: per_match(entry.goals_for),
        goals_against_per_match: per_match(entry.goals_against),
        form_score: form_score(&entry.form),
    }
}

/// 0-100 score over the last five results: W=3, D=1, anything else 0.
pub fn form_score(form: &str) -> f64 {
    let chars: Vec<char> = form.chars().collect();
    let window = &chars[chars.len().saturating_sub(FORM_WINDOW)..];
    if window.is_empty() {
        return 0.0;
    }

    let earned: u32 = window
        .iter()
        .map(|c| match c {
            'W' => 3,
            'D' => 1,
            _ => 0,
        })
        .sum();
    earned as f64 / (window.len() as f64 * 3.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(played: u32, won: u32, gf: u32, ga: u32, form: &str) -> StandingsEntry {
        StandingsEntry {
            position: 1,
            team: "Test FC".to_string(),
            short_name: "TFC".to_string(),
            played,
            won,
            draw: 0,
            lost: played.saturating_sub(won),
            goals_for: gf,
            goals_against: ga,
            goal_difference: gf as i32 - ga as i32,
            points: won * 3,
            form: form.to_string(),
        }
    }

    #[test]
    fn zero_played_degrades_to_zero() {
        let s = normalize(&entry(0, 0, 0, 0, ""));
        assert_eq!(s.win_rate, 0.0);
        assert_eq!(s.goals_for_per_match, 0.0);
        assert_eq!(s.goals_against_per_match, 0.0);
        assert_eq!(s.form_score, 0.0);
    }

    #[test]
    fn ratios_use_matches_played() {
        let s = normalize(&entry(19, 13, 45, 15, "WWDLW"));
        assert!((s.win_rate - 68.421).abs() < 0.01);
        assert!((s.goals_for_per_match - 2.368).abs() < 0.01);
        assert!((s.goals_against_per_match - 0.789).abs() < 0.01);
        assert_eq!(s.points, 39.0);
    }

    #[test]
    fn form_extremes() {
        assert_eq!(form_score("WWWWW"), 100.0);
        assert_eq!(form_score("WWW"), 100.0);
        assert_eq!(form_score("LLLLL"), 0.0);
        assert_eq!(form_score("L"), 0.0);
        assert_eq!(form_score(""), 0.0);
    }

    #[test]
    fn form_only_counts_last_five() {
        // Leading losses fall outside the window.
        assert_eq!(form_score("LLLWWWWW"), 100.0);
        // W W D L ? -> 7 / 15
        assert!((form_score("WWDL?") - 46.666).abs() < 0.01);
        assert!((form_score("DDD") - 33.333).abs() < 0.01);
    }
}
