use anyhow::bail;

use football_dash::assistant;
use football_dash::config::AppConfig;
use football_dash::provider::load_snapshot;
use football_dash::state::Competition;

fn main() -> anyhow::Result<()> {
    let mut config = AppConfig::load();
    let mut words = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--competition" | "-c" => {
                let Some(code) = args.next() else {
                    bail!("--competition needs a code (FL1, PL, PD, BL1, SA)");
                };
                let Some(competition) = Competition::from_code(&code) else {
                    bail!("unknown competition code: {code}");
                };
                config.competition = competition;
            }
            "--help" | "-h" => {
                println!("usage: ask [--competition CODE] <question...>");
                return Ok(());
            }
            _ => words.push(arg),
        }
    }

    let question = words.join(" ");
    if question.trim().is_empty() {
        bail!("usage: ask [--competition CODE] <question...>");
    }

    let (snapshot, logs) = load_snapshot(&config, &config.cache_policy(), config.competition);
    for line in logs {
        eprintln!("{line}");
    }

    let fixtures = (!snapshot.upcoming.is_empty()).then_some(snapshot.upcoming.as_slice());
    println!(
        "{}",
        assistant::answer(&question, &snapshot.standings, fixtures)
    );
    Ok(())
}
