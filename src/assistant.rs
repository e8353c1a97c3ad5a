//! Rule-based football assistant.
//!
//! A question is case-folded once and checked against [`RULES`] in order; the
//! first rule whose predicate matches produces the reply. Nothing here keeps
//! state between calls: the caller passes the current standings/fixtures
//! snapshot and stores the conversation itself.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::league_table::form_emoji;
use crate::state::{Fixture, StandingsEntry};
use crate::stats;
use crate::win_prob::{self, Verdict};

pub const NO_DATA_MESSAGE: &str =
    "Aucune donnée de classement disponible pour le moment. Ajoutez une clé API ou réessayez plus tard.";

pub const SCORERS_MESSAGE: &str =
    "⚽ Les meilleurs buteurs sont affichés dans l'onglet « Buteurs » du tableau de bord.";

pub const FALLBACK_QUESTIONS: [&str; 6] = [
    "Quel est le classement ?",
    "Quels sont les prochains matchs ?",
    "Qui va gagner entre Paris SG et Marseille ?",
    "Quelle est la forme de Lens ?",
    "Quelle est la meilleure défense ?",
    "Qui a le plus de points ?",
];

const FALLBACK_SAMPLE: usize = 3;
const TOP_STANDINGS: usize = 5;
const MAX_FIXTURES: usize = 3;
const TEAM_PREFIX_LEN: usize = 3;

const STANDINGS_KEYWORDS: &[&str] = &["classement", "standings", "position", "table"];
const SCORER_KEYWORDS: &[&str] = &["buteur", "scorer", "score", "marqueur"];
const FIXTURE_KEYWORDS: &[&str] = &["match", "rencontre", "calendrier", "schedule"];
const PREDICTION_KEYWORDS: &[&str] = &[
    "qui va gagner",
    "who will win",
    "prédiction",
    "prediction",
    "gagnera",
    "pronostic",
];
const GREETING_WORDS: &[&str] = &["bonjour", "bonsoir", "salut", "coucou", "hello", "hi", "hey"];
const HELP_KEYWORDS: &[&str] = &["aide", "help", "comment", "que peux-tu", "what can you"];
const FORM_KEYWORDS: &[&str] = &["forme", "form"];
const COMPETITION_KEYWORDS: &[&str] = &[
    "championnat",
    "ligue",
    "league",
    "compétition",
    "competition",
];
const GOAL_KEYWORDS: &[&str] = &["but", "goal", "attaque", "attack"];
const GOAL_SUPERLATIVES: &[&str] = &["meilleur", "plus", "most", "best"];
const DEFENSE_KEYWORDS: &[&str] = &["défense", "defense", "defence"];
const POINTS_KEYWORDS: &[&str] = &["point"];
const POINTS_SUPERLATIVES: &[&str] = &["plus", "most", "max", "meilleur"];

const PAIR_OPENERS: &[&str] = &["entre", "between"];
const PAIR_SEPARATORS: &[&str] = &[" et ", " and "];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Standings,
    Scorers,
    Fixtures,
    Prediction,
    Greeting,
    Help,
    Form,
    Competition,
    BestAttack,
    BestDefense,
    MostPoints,
    Fallback,
}

struct Query {
    folded: String,
}

impl Query {
    fn new(question: &str) -> Self {
        Self {
            folded: question.trim().to_lowercase(),
        }
    }

    fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| self.folded.contains(kw))
    }

    fn has_word(&self, words: &[&str]) -> bool {
        self.folded
            .split(|c: char| !c.is_alphanumeric())
            .any(|w| !w.is_empty() && words.contains(&w))
    }
}

struct Context<'a> {
    standings: &'a [StandingsEntry],
    fixtures: Option<&'a [Fixture]>,
}

struct Rule {
    intent: Intent,
    matches: fn(&Query) -> bool,
    respond: fn(&Query, &Context) -> String,
}

/// Evaluated top to bottom; the first match wins.
const RULES: &[Rule] = &[
    Rule {
        intent: Intent::Standings,
        matches: |q| q.contains_any(STANDINGS_KEYWORDS),
        respond: respond_standings,
    },
    Rule {
        intent: Intent::Scorers,
        matches: |q| q.contains_any(SCORER_KEYWORDS),
        respond: |_, _| SCORERS_MESSAGE.to_string(),
    },
    Rule {
        intent: Intent::Fixtures,
        matches: |q| q.contains_any(FIXTURE_KEYWORDS),
        respond: respond_fixtures,
    },
    Rule {
        intent: Intent::Prediction,
        matches: |q| q.contains_any(PREDICTION_KEYWORDS),
        respond: respond_prediction,
    },
    Rule {
        intent: Intent::Greeting,
        matches: |q| q.has_word(GREETING_WORDS),
        respond: |_, _| respond_greeting(),
    },
    Rule {
        intent: Intent::Help,
        matches: |q| q.contains_any(HELP_KEYWORDS),
        respond: |_, _| respond_help(),
    },
    Rule {
        intent: Intent::Form,
        matches: |q| q.contains_any(FORM_KEYWORDS),
        respond: respond_form,
    },
    Rule {
        intent: Intent::Competition,
        matches: |q| q.contains_any(COMPETITION_KEYWORDS),
        respond: respond_competition,
    },
    Rule {
        intent: Intent::BestAttack,
        matches: |q| q.contains_any(GOAL_KEYWORDS) && q.contains_any(GOAL_SUPERLATIVES),
        respond: respond_best_attack,
    },
    Rule {
        intent: Intent::BestDefense,
        matches: |q| q.contains_any(DEFENSE_KEYWORDS),
        respond: respond_best_defense,
    },
    Rule {
        intent: Intent::MostPoints,
        matches: |q| q.contains_any(POINTS_KEYWORDS) && q.contains_any(POINTS_SUPERLATIVES),
        respond: respond_most_points,
    },
];

pub fn classify(question: &str) -> Intent {
    let query = Query::new(question);
    RULES
        .iter()
        .find(|rule| (rule.matches)(&query))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Fallback)
}

pub fn answer(
    question: &str,
    standings: &[StandingsEntry],
    fixtures: Option<&[Fixture]>,
) -> String {
    answer_with_rng(question, standings, fixtures, &mut rand::thread_rng())
}

/// Same as [`answer`], with the fallback's question sample drawn from `rng`.
pub fn answer_with_rng<R: Rng + ?Sized>(
    question: &str,
    standings: &[StandingsEntry],
    fixtures: Option<&[Fixture]>,
    rng: &mut R,
) -> String {
    let query = Query::new(question);
    let snapshot = Context {
        standings,
        fixtures,
    };
    match RULES.iter().find(|rule| (rule.matches)(&query)) {
        Some(rule) => (rule.respond)(&query, &snapshot),
        None => respond_fallback(rng),
    }
}

fn respond_standings(_: &Query, snap: &Context) -> String {
    if snap.standings.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }
    let mut rows: Vec<&StandingsEntry> = snap.standings.iter().collect();
    rows.sort_by_key(|row| row.position);

    let mut lines = vec![format!("📊 Classement (top {TOP_STANDINGS}) :")];
    for row in rows.into_iter().take(TOP_STANDINGS) {
        lines.push(format!("{}. {} : {} pts", row.position, row.team, row.points));
    }
    lines.join("\n")
}

fn respond_fixtures(_: &Query, snap: &Context) -> String {
    let upcoming: Vec<&Fixture> = snap
        .fixtures
        .unwrap_or_default()
        .iter()
        .filter(|f| f.status.is_upcoming())
        .take(MAX_FIXTURES)
        .collect();

    if upcoming.is_empty() {
        return [
            "📅 Pas de données de matchs disponibles pour le moment.",
            "Essayez plutôt :",
            "• Quel est le classement ?",
            "• Qui va gagner entre Paris SG et Marseille ?",
        ]
        .join("\n");
    }

    let mut lines = vec!["📅 Prochains matchs :".to_string()];
    for f in upcoming {
        let matchday = f
            .matchday
            .map(|d| format!(" (journée {d})"))
            .unwrap_or_default();
        lines.push(format!(
            "• {} : {} vs {}{matchday}",
            f.kickoff_label(),
            f.home,
            f.away
        ));
    }
    lines.join("\n")
}

fn respond_prediction(query: &Query, snap: &Context) -> String {
    if snap.standings.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }
    let usage = "🔮 Pour un pronostic, nommez deux équipes, par exemple : « Qui va gagner entre Paris SG et Marseille ? »".to_string();

    let Some((first, second)) = extract_team_pair(&query.folded) else {
        return usage;
    };
    let (Some(team_a), Some(team_b)) = (
        find_team_by_prefix(snap.standings, &first),
        find_team_by_prefix(snap.standings, &second),
    ) else {
        return usage;
    };

    let stats_a = stats::normalize(team_a);
    let stats_b = stats::normalize(team_b);
    // The first named team hosts.
    let result = win_prob::predict(&stats_a, &stats_b, true);

    let verdict = match result.verdict {
        Verdict::TeamAFavored => format!("{} part favori.", team_a.team),
        Verdict::TeamBFavored => format!("{} part favori.", team_b.team),
        Verdict::Close => "Match serré, le nul est possible.".to_string(),
    };

    [
        format!("🔮 Pronostic : {} vs {}", team_a.team, team_b.team),
        format!("• Victoire {} : {:.1}%", team_a.team, result.team_a),
        format!("• Match nul : {:.1}%", result.draw),
        format!("• Victoire {} : {:.1}%", team_b.team, result.team_b),
        format!("👉 {verdict} (avantage du terrain pour {})", team_a.team),
    ]
    .join("\n")
}

fn respond_greeting() -> String {
    "Bonjour ! 👋 Je suis l'assistant football. Je peux vous donner le classement, \
     les prochains matchs, la forme d'une équipe ou un pronostic entre deux équipes."
        .to_string()
}

fn respond_help() -> String {
    [
        "🤖 Voici ce que je sais faire :",
        "• Classement : « Quel est le classement ? »",
        "• Matchs : « Quels sont les prochains matchs ? »",
        "• Pronostic : « Qui va gagner entre Paris SG et Marseille ? »",
        "• Forme : « Quelle est la forme de Lens ? »",
        "• Statistiques : meilleure attaque, meilleure défense, plus de points",
        "• Buteurs : onglet « Buteurs »",
    ]
    .join("\n")
}

fn respond_form(query: &Query, snap: &Context) -> String {
    if snap.standings.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let question_tokens: Vec<&str> = tokens(&query.folded).collect();
    let shares_token = |name: &str| {
        let name = name.to_lowercase();
        tokens(&name).any(|t| question_tokens.contains(&t))
    };
    let found = snap
        .standings
        .iter()
        .find(|row| shares_token(row.short_name.as_str()))
        .or_else(|| snap.standings.iter().find(|row| shares_token(row.team.as_str())));

    let Some(row) = found else {
        return [
            "🔍 Équipe introuvable dans le classement actuel.",
            "Exemples : « Quelle est la forme de Lens ? », « forme de Marseille »",
        ]
        .join("\n");
    };

    [
        format!("📈 Forme de {} : {}", row.team, form_emoji(&row.form)),
        format!(
            "Position : {} | Points : {} | Buts : {} marqués, {} encaissés",
            row.position, row.points, row.goals_for, row.goals_against
        ),
    ]
    .join("\n")
}

fn respond_competition(_: &Query, snap: &Context) -> String {
    let mut rows: Vec<&StandingsEntry> = snap.standings.iter().collect();
    rows.sort_by_key(|row| row.position);
    let Some(leader) = rows.first() else {
        return NO_DATA_MESSAGE.to_string();
    };

    let podium = rows
        .iter()
        .take(3)
        .map(|row| format!("{}. {} ({} pts)", row.position, row.team, row.points))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "🏆 {} mène le championnat avec {} points.\nTop 3 : {podium}",
        leader.team, leader.points
    )
}

fn respond_best_attack(_: &Query, snap: &Context) -> String {
    match first_max_by(snap.standings, |row| row.goals_for as i64) {
        Some(row) => format!(
            "⚽ Meilleure attaque : {} avec {} buts marqués ({:.2} par match).",
            row.team,
            row.goals_for,
            stats::normalize(row).goals_for_per_match
        ),
        None => NO_DATA_MESSAGE.to_string(),
    }
}

fn respond_best_defense(_: &Query, snap: &Context) -> String {
    match first_max_by(snap.standings, |row| -(row.goals_against as i64)) {
        Some(row) => format!(
            "🛡️ Meilleure défense : {} avec seulement {} buts encaissés ({:.2} par match).",
            row.team,
            row.goals_against,
            stats::normalize(row).goals_against_per_match
        ),
        None => NO_DATA_MESSAGE.to_string(),
    }
}

fn respond_most_points(_: &Query, snap: &Context) -> String {
    match first_max_by(snap.standings, |row| row.points as i64) {
        Some(row) => format!(
            "🥇 {} compte le plus de points : {} pts en {} matchs.",
            row.team, row.points, row.played
        ),
        None => NO_DATA_MESSAGE.to_string(),
    }
}

fn respond_fallback<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut lines = vec![
        "🤔 Je n'ai pas compris la question. Essayez par exemple :".to_string(),
    ];
    for q in FALLBACK_QUESTIONS.choose_multiple(rng, FALLBACK_SAMPLE) {
        lines.push(format!("• {q}"));
    }
    lines.join("\n")
}

/// "… entre X et Y …" → (x, y), lowercased and trimmed.
fn extract_team_pair(folded: &str) -> Option<(String, String)> {
    let rest = PAIR_OPENERS
        .iter()
        .find_map(|opener| text_after_word(folded, opener))?;
    let (first, second) = PAIR_SEPARATORS
        .iter()
        .find_map(|sep| rest.split_once(sep))?;
    let first = clean_fragment(first);
    let second = clean_fragment(second);
    if first.is_empty() || second.is_empty() {
        return None;
    }
    Some((first, second))
}

fn text_after_word<'t>(text: &'t str, word: &str) -> Option<&'t str> {
    text.match_indices(word).find_map(|(idx, _)| {
        let before_ok = text[..idx]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after = &text[idx + word.len()..];
        let after_ok = after.chars().next().is_none_or(|c| !c.is_alphanumeric());
        (before_ok && after_ok).then_some(after)
    })
}

fn clean_fragment(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, '?' | '!' | '.' | ',' | ';' | ':' | '"' | '«' | '»'))
        .to_string()
}

/// First team, in table order, whose name starts with the fragment's first three
/// characters. Full names are tried before short names.
fn find_team_by_prefix<'a>(
    standings: &'a [StandingsEntry],
    fragment: &str,
) -> Option<&'a StandingsEntry> {
    let prefix: String = fragment
        .trim()
        .to_lowercase()
        .chars()
        .take(TEAM_PREFIX_LEN)
        .collect();
    if prefix.is_empty() {
        return None;
    }
    let starts = |name: &str| name.to_lowercase().starts_with(&prefix);
    standings
        .iter()
        .find(|row| starts(row.team.as_str()))
        .or_else(|| standings.iter().find(|row| starts(row.short_name.as_str())))
}

/// Words of at least three characters; "de", "la" and the like never identify a team.
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| t.chars().count() >= TEAM_PREFIX_LEN)
}

/// Keeps the higher-placed team when several share the best value.
fn first_max_by<F>(standings: &[StandingsEntry], key: F) -> Option<&StandingsEntry>
where
    F: Fn(&StandingsEntry) -> i64,
{
    standings.iter().fold(None, |best, row| match best {
        Some(b) if key(b) >= key(row) => Some(b),
        _ => Some(row),
    })
}
