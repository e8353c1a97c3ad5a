use std::env;

use crate::http_cache::{CachePolicy, DEFAULT_TTL_MINS};
use crate::state::Competition;

const DEFAULT_MATCHES_LIMIT: u32 = 10;
const MAX_MATCHES_LIMIT: u32 = 50;
const MIN_AUTO_REFRESH_SECS: u64 = 30;
const MAX_AUTO_REFRESH_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub competition: Competition,
    pub cache_enabled: bool,
    pub cache_ttl_mins: u64,
    pub auto_refresh_secs: Option<u64>,
    pub matches_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            competition: Competition::Ligue1,
            cache_enabled: true,
            cache_ttl_mins: DEFAULT_TTL_MINS,
            auto_refresh_secs: None,
            matches_limit: DEFAULT_MATCHES_LIMIT,
        }
    }
}

impl AppConfig {
    /// Reads `.env.local`, then `.env`, then the process environment.
    pub fn load() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key).and_then(|val| {
                let val = val.trim().to_string();
                if val.is_empty() { None } else { Some(val) }
            })
        };

        let competition = get("APP_COMPETITION")
            .and_then(|code| Competition::from_code(&code))
            .unwrap_or(Competition::Ligue1);
        let cache_enabled = get("CACHE_ENABLED")
            .map(|val| parse_flag(&val))
            .unwrap_or(true);
        let cache_ttl_mins = get("CACHE_TTL_MINS")
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TTL_MINS)
            .max(1);
        let auto_refresh_secs = get("AUTO_REFRESH_SECS")
            .and_then(|val| val.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(|secs| secs.clamp(MIN_AUTO_REFRESH_SECS, MAX_AUTO_REFRESH_SECS));
        let matches_limit = get("MATCHES_LIMIT")
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MATCHES_LIMIT)
            .clamp(1, MAX_MATCHES_LIMIT);

        Self {
            api_key: get("FOOTBALL_DATA_API_KEY"),
            competition,
            cache_enabled,
            cache_ttl_mins,
            auto_refresh_secs,
            matches_limit,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy::new(self.cache_enabled, self.cache_ttl_mins)
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        assert_eq!(config(&[]), AppConfig::default());
        assert!(!config(&[]).has_api_key());
    }

    #[test]
    fn blank_api_key_means_demo() {
        assert!(!config(&[("FOOTBALL_DATA_API_KEY", "   ")]).has_api_key());
        let cfg = config(&[("FOOTBALL_DATA_API_KEY", " abc ")]);
        assert_eq!(cfg.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn competition_code() {
        assert_eq!(
            config(&[("APP_COMPETITION", "pl")]).competition,
            Competition::PremierLeague
        );
        assert_eq!(
            config(&[("APP_COMPETITION", "XYZ")]).competition,
            Competition::Ligue1
        );
    }

    #[test]
    fn cache_flags() {
        for off in ["0", "false", "NO", "off"] {
            assert!(!config(&[("CACHE_ENABLED", off)]).cache_enabled, "{off}");
        }
        assert!(config(&[("CACHE_ENABLED", "yes")]).cache_enabled);
        assert_eq!(config(&[("CACHE_TTL_MINS", "0")]).cache_ttl_mins, 1);
        assert_eq!(config(&[("CACHE_TTL_MINS", "junk")]).cache_ttl_mins, 30);
    }

    #[test]
    fn auto_refresh_is_clamped() {
        assert_eq!(config(&[("AUTO_REFRESH_SECS", "0")]).auto_refresh_secs, None);
        assert_eq!(
            config(&[("AUTO_REFRESH_SECS", "5")]).auto_refresh_secs,
            Some(30)
        );
        assert_eq!(
            config(&[("AUTO_REFRESH_SECS", "9999")]).auto_refresh_secs,
            Some(300)
        );
    }

    #[test]
    fn matches_limit_bounds() {
        assert_eq!(config(&[("MATCHES_LIMIT", "0")]).matches_limit, 1);
        assert_eq!(config(&[("MATCHES_LIMIT", "80")]).matches_limit, 50);
    }
}
