use cricket_api::{DEFAULT_API_BASE, DEFAULT_TIMEOUT};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_REFRESH_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base:         String,
    pub refresh_interval: Duration,
    pub api_timeout:      Duration,
    pub log_dir:          PathBuf,
}

impl Config {
    /// Reads env (after `.env` is loaded). Bad numbers fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secs = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(default))
        };

        Self {
            api_base: lookup("CRICKET_API_BASE")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            refresh_interval: secs("LIVE_REFRESH_INTERVAL_SECS", DEFAULT_REFRESH_SECS),
            api_timeout: secs("API_TIMEOUT_SECS", DEFAULT_TIMEOUT.as_secs()),
            log_dir: lookup("KHELEGA_LOG_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
        }
    }
}
