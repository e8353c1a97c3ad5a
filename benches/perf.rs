use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use football_dash::assistant;
use football_dash::football_data::parse_standings_json;
use football_dash::league_table::LeagueMetrics;
use football_dash::sample_data;
use football_dash::state::Competition;
use football_dash::{stats, win_prob};

const STANDINGS_JSON: &str = include_str!("../tests/fixtures/standings_fl1.json");

fn bench_normalize_and_predict(c: &mut Criterion) {
    let table = sample_data::demo_standings(Competition::Ligue1);
    c.bench_function("normalize_predict_all_pairs", |b| {
        b.iter(|| {
            let normalized: Vec<_> = table.iter().map(stats::normalize).collect();
            let mut acc = 0.0;
            for a in &normalized {
                for o in &normalized {
                    acc += win_prob::predict(black_box(a), black_box(o), true).team_a;
                }
            }
            black_box(acc);
        })
    });
}

fn bench_assistant(c: &mut Criterion) {
    let table = sample_data::demo_standings(Competition::Ligue1);
    let fixtures = sample_data::demo_upcoming(Competition::Ligue1);
    let questions = [
        "Quel est le classement ?",
        "Qui va gagner entre Paris SG et Marseille ?",
        "Quelle est la forme de Lens ?",
        "Quels sont les prochains matchs ?",
        "Qui a le plus de points ?",
    ];
    c.bench_function("assistant_answer", |b| {
        b.iter(|| {
            for q in questions {
                let reply = assistant::answer(black_box(q), &table, Some(fixtures.as_slice()));
                black_box(reply.len());
            }
        })
    });
}

fn bench_standings_parse(c: &mut Criterion) {
    c.bench_function("standings_parse_metrics", |b| {
        b.iter(|| {
            let rows = parse_standings_json(black_box(STANDINGS_JSON)).unwrap();
            black_box(LeagueMetrics::compute(&rows));
        })
    });
}

criterion_group!(
    benches,
    bench_normalize_and_predict,
    bench_assistant,
    bench_standings_parse
);
criterion_main!(benches);
