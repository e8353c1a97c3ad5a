use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ETAG, IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED};
use serde::{Deserialize, Serialize};

const CACHE_VERSION: u32 = 2;
const CACHE_DIR: &str = "football_dash";
const CACHE_FILE: &str = "http_cache.json";

pub const DEFAULT_TTL_MINS: u64 = 30;

static CACHE: Mutex<Option<HttpCacheFile>> = Mutex::new(None);

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct HttpCacheFile {
    version: u32,
    entries: HashMap<String, CacheEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    body: String,
    etag: Option<String>,
    last_modified: Option<String>,
    fetched_at: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub enabled: bool,
    pub ttl: Duration,
}

impl CachePolicy {
    pub fn new(enabled: bool, ttl_mins: u64) -> Self {
        Self {
            enabled,
            ttl: Duration::from_secs(ttl_mins.max(1) * 60),
        }
    }

    pub fn disabled() -> Self {
        Self::new(false, DEFAULT_TTL_MINS)
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(true, DEFAULT_TTL_MINS)
    }
}

/// Where a body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOrigin {
    Network,
    /// Cached and younger than the TTL; no request was made.
    Fresh,
    /// Server answered 304 to a conditional request.
    Revalidated,
    /// Request failed or was rate limited; an expired body was served.
    Stale,
}

impl CacheOrigin {
    pub fn label(self) -> &'static str {
        match self {
            CacheOrigin::Network => "network",
            CacheOrigin::Fresh => "cache",
            CacheOrigin::Revalidated => "revalidated",
            CacheOrigin::Stale => "stale cache",
        }
    }

    pub fn is_cached(self) -> bool {
        !matches!(self, CacheOrigin::Network)
    }
}

#[derive(Debug, Clone)]
pub struct CachedBody {
    pub body: String,
    pub fetched_at: u64,
    pub origin: CacheOrigin,
}

pub fn fetch_json_cached(
    client: &Client,
    url: &str,
    extra_headers: &[(&str, &str)],
    policy: &CachePolicy,
) -> Result<CachedBody> {
    let now = now_secs();
    if !policy.enabled {
        let body = fetch_uncached(client, url, extra_headers)?;
        return Ok(CachedBody {
            body,
            fetched_at: now,
            origin: CacheOrigin::Network,
        });
    }

    let cached_entry = lock_cache().as_ref().and_then(|c| c.entries.get(url).cloned());
    if let Some(entry) = cached_entry.as_ref() {
        if is_fresh(entry.fetched_at, now, policy.ttl) {
            return Ok(CachedBody {
                body: entry.body.clone(),
                fetched_at: entry.fetched_at,
                origin: CacheOrigin::Fresh,
            });
        }
    }

    let mut req = client.get(url);
    for (name, value) in extra_headers {
        req = req.header(*name, *value);
    }
    if let Some(entry) = cached_entry.as_ref() {
        if let Some(etag) = entry.etag.as_ref() {
            req = req.header(IF_NONE_MATCH, etag);
        }
        if let Some(last_modified) = entry.last_modified.as_ref() {
            req = req.header(IF_MODIFIED_SINCE, last_modified);
        }
    }

    let resp = match req.send() {
        Ok(resp) => resp,
        Err(err) => {
            return match cached_entry {
                Some(entry) => Ok(stale(entry)),
                None => Err(err).context("request failed"),
            };
        }
    };
    let status = resp.status();
    let headers = resp.headers().clone();

    if status == StatusCode::NOT_MODIFIED {
        let Some(mut entry) = cached_entry else {
            return Err(anyhow::anyhow!("received 304 without cache body"));
        };
        entry.fetched_at = now;
        store_entry(url, entry.clone());
        return Ok(CachedBody {
            body: entry.body,
            fetched_at: now,
            origin: CacheOrigin::Revalidated,
        });
    }

    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        if let Some(entry) = cached_entry {
            return Ok(stale(entry));
        }
    }

    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {}: {}", status, truncate(&body, 200)));
    }

    let etag = headers
        .get(ETAG)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let last_modified = headers
        .get(LAST_MODIFIED)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    store_entry(
        url,
        CacheEntry {
            body: body.clone(),
            etag,
            last_modified,
            fetched_at: now,
        },
    );
    Ok(CachedBody {
        body,
        fetched_at: now,
        origin: CacheOrigin::Network,
    })
}

/// Drops every entry, in memory and on disk. Returns how many were removed.
pub fn clear_cache() -> Result<usize> {
    let removed = {
        let mut guard = lock_cache();
        let cache = guard.get_or_insert_with(load_cache_file);
        let n = cache.entries.len();
        cache.entries.clear();
        n
    };
    if let Some(path) = cache_path() {
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("remove http cache {}", path.display()))?;
        }
    }
    Ok(removed)
}

pub fn cache_len() -> usize {
    let mut guard = lock_cache();
    guard.get_or_insert_with(load_cache_file).entries.len()
}

pub fn is_fresh(fetched_at: u64, now: u64, ttl: Duration) -> bool {
    now.saturating_sub(fetched_at) < ttl.as_secs()
}

pub fn cache_path() -> Option<PathBuf> {
    if let Ok(base) = std::env::var("XDG_CACHE_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(CACHE_DIR).join(CACHE_FILE));
        }
    }
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(PathBuf::from(home).join(".cache").join(CACHE_DIR).join(CACHE_FILE))
}

fn fetch_uncached(client: &Client, url: &str, extra_headers: &[(&str, &str)]) -> Result<String> {
    let mut req = client.get(url);
    for (name, value) in extra_headers {
        req = req.header(*name, *value);
    }
    let resp = req.send().context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {}: {}", status, truncate(&body, 200)));
    }
    Ok(body)
}

fn stale(entry: CacheEntry) -> CachedBody {
    CachedBody {
        body: entry.body,
        fetched_at: entry.fetched_at,
        origin: CacheOrigin::Stale,
    }
}

fn lock_cache() -> MutexGuard<'static, Option<HttpCacheFile>> {
    let mut guard = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if guard.is_none() {
        *guard = Some(load_cache_file());
    }
    guard
}

fn store_entry(key: &str, entry: CacheEntry) {
    let mut guard = lock_cache();
    let cache = guard.get_or_insert_with(load_cache_file);
    cache.version = CACHE_VERSION;
    cache.entries.insert(key.to_string(), entry);
    // A failed write only costs a refetch next run.
    let _ = save_cache_file(cache);
}

fn load_cache_file() -> HttpCacheFile {
    let Some(path) = cache_path() else {
        return HttpCacheFile::default();
    };
    let Ok(raw) = fs::read_to_string(path) else {
        return HttpCacheFile::default();
    };
    parse_cache_file(&raw)
}

fn parse_cache_file(raw: &str) -> HttpCacheFile {
    let cache = serde_json::from_str::<HttpCacheFile>(raw).unwrap_or_default();
    if cache.version != CACHE_VERSION {
        return HttpCacheFile::default();
    }
    cache
}

fn save_cache_file(cache: &HttpCacheFile) -> Result<()> {
    let Some(path) = cache_path() else {
        return Ok(());
    };
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    fs::create_dir_all(dir).ok();
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string(cache).context("serialize http cache")?;
    fs::write(&tmp, json).context("write http cache")?;
    fs::rename(&tmp, &path).context("swap http cache")?;
    Ok(())
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freshness_respects_ttl() {
        let ttl = CachePolicy::default().ttl;
        assert_eq!(ttl, Duration::from_secs(30 * 60));
        assert!(is_fresh(1_000, 1_000, ttl));
        assert!(is_fresh(1_000, 1_000 + 29 * 60, ttl));
        assert!(!is_fresh(1_000, 1_000 + 30 * 60, ttl));
        // Clock going backwards keeps the entry fresh.
        assert!(is_fresh(2_000, 1_000, ttl));
    }

    #[test]
    fn ttl_has_a_one_minute_floor() {
        assert_eq!(CachePolicy::new(true, 0).ttl, Duration::from_secs(60));
        assert!(!CachePolicy::disabled().enabled);
    }

    #[test]
    fn cache_file_version_mismatch_is_discarded() {
        let old = r#"{"version":1,"entries":{"u":{"body":"{}","etag":null,"last_modified":null,"fetched_at":5}}}"#;
        assert!(parse_cache_file(old).entries.is_empty());

        let current = old.replace("\"version\":1", &format!("\"version\":{CACHE_VERSION}"));
        let parsed = parse_cache_file(&current);
        assert_eq!(parsed.entries["u"].fetched_at, 5);

        assert!(parse_cache_file("not json").entries.is_empty());
    }

    #[test]
    fn origin_labels() {
        assert!(!CacheOrigin::Network.is_cached());
        assert!(CacheOrigin::Stale.is_cached());
        assert_eq!(CacheOrigin::Revalidated.label(), "revalidated");
    }
}
