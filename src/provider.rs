use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use chrono::Local;

use crate::config::AppConfig;
use crate::export;
use crate::football_data::{self, MatchStatusFilter};
use crate::http_cache::{self, CachePolicy};
use crate::sample_data;
use crate::state::{Competition, DataSource, Delta, ProviderCommand, Snapshot};

const SCORERS_LIMIT: u32 = 10;

/// Runs the data worker until the command channel closes.
pub fn spawn_provider(
    config: AppConfig,
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut cache_enabled = config.cache_enabled;
        send_cache_info(&tx, cache_enabled);

        for cmd in cmd_rx {
            match cmd {
                ProviderCommand::Refresh { competition } => {
                    let policy = CachePolicy::new(cache_enabled, config.cache_ttl_mins);
                    let (snapshot, logs) = load_snapshot(&config, &policy, competition);
                    for line in logs {
                        let _ = tx.send(Delta::Log(line));
                    }
                    let _ = tx.send(Delta::SetSnapshot(snapshot));
                    send_cache_info(&tx, cache_enabled);
                }
                ProviderCommand::SetCacheEnabled(enabled) => {
                    cache_enabled = enabled;
                    let _ = tx.send(Delta::Log(format!(
                        "[INFO] Cache {}",
                        if enabled { "enabled" } else { "disabled" }
                    )));
                    send_cache_info(&tx, cache_enabled);
                }
                ProviderCommand::ClearCache => {
                    match http_cache::clear_cache() {
                        Ok(n) => {
                            let _ = tx.send(Delta::Log(format!("[INFO] Cache cleared ({n} entries)")));
                        }
                        Err(err) => {
                            let _ = tx.send(Delta::Log(format!("[WARN] Cache clear error: {err}")));
                        }
                    }
                    send_cache_info(&tx, cache_enabled);
                }
                ProviderCommand::Export {
                    path,
                    competition,
                    standings,
                } => match export::export_standings(&path, competition, &standings) {
                    Ok(rows) => {
                        let _ = tx.send(Delta::ExportFinished { path, rows });
                    }
                    Err(err) => {
                        let _ = tx.send(Delta::Log(format!("[WARN] Export error: {err:#}")));
                    }
                },
            }
        }
    })
}

/// Fetches one competition, falling back to demo data. Returns the snapshot and console lines.
pub fn load_snapshot(
    config: &AppConfig,
    policy: &CachePolicy,
    competition: Competition,
) -> (Snapshot, Vec<String>) {
    let mut logs = Vec::new();
    let updated_at = Local::now().format("%H:%M:%S").to_string();

    let Some(api_key) = config.api_key.as_deref() else {
        logs.push(format!(
            "[INFO] No FOOTBALL_DATA_API_KEY, showing demo data for {}",
            competition.label()
        ));
        return (sample_data::demo_snapshot(competition, updated_at), logs);
    };

    let code = competition.code();
    let standings = match football_data::fetch_standings(code, api_key, policy) {
        Ok(fetched) if !fetched.data.is_empty() => fetched,
        Ok(_) => {
            logs.push(format!(
                "[WARN] {} standings are empty, showing demo data",
                competition.label()
            ));
            return (sample_data::demo_snapshot(competition, updated_at), logs);
        }
        Err(err) => {
            logs.push(format!("[WARN] Standings fetch error: {err:#}; showing demo data"));
            return (sample_data::demo_snapshot(competition, updated_at), logs);
        }
    };

    let upcoming = football_data::fetch_matches(
        code,
        MatchStatusFilter::Scheduled,
        config.matches_limit,
        api_key,
        policy,
    )
    .map(|f| f.data)
    .unwrap_or_else(|err| {
        logs.push(format!("[WARN] Fixtures fetch error: {err:#}"));
        Vec::new()
    });
    let results = football_data::fetch_matches(
        code,
        MatchStatusFilter::Finished,
        config.matches_limit,
        api_key,
        policy,
    )
    .map(|f| f.data)
    .unwrap_or_else(|err| {
        logs.push(format!("[WARN] Results fetch error: {err:#}"));
        Vec::new()
    });
    let scorers = football_data::fetch_scorers(code, SCORERS_LIMIT, api_key, policy)
        .map(|f| f.data)
        .unwrap_or_else(|err| {
            logs.push(format!("[WARN] Scorers fetch error: {err:#}"));
            Vec::new()
        });

    let source = if standings.origin.is_cached() {
        DataSource::Cached
    } else {
        DataSource::Live
    };
    logs.push(format!(
        "[INFO] {} loaded ({}): {} teams, {} upcoming, {} results, {} scorers",
        competition.label(),
        standings.origin.label(),
        standings.data.len(),
        upcoming.len(),
        results.len(),
        scorers.len()
    ));

    let snapshot = Snapshot {
        competition,
        source,
        standings: standings.data,
        upcoming,
        results,
        scorers,
        updated_at,
    };
    (snapshot, logs)
}

fn send_cache_info(tx: &Sender<Delta>, enabled: bool) {
    let _ = tx.send(Delta::CacheInfo {
        enabled,
        entries: http_cache::cache_len(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_api_key_serves_demo_snapshot() {
        let config = AppConfig::default();
        let (snapshot, logs) =
            load_snapshot(&config, &CachePolicy::disabled(), Competition::PremierLeague);
        assert_eq!(snapshot.source, DataSource::Demo);
        assert_eq!(snapshot.competition, Competition::PremierLeague);
        assert_eq!(snapshot.standings[0].team, "Manchester City");
        assert!(!snapshot.upcoming.is_empty());
        assert_eq!(logs.len(), 1);
        assert!(logs[0].starts_with("[INFO]"));
    }
}
