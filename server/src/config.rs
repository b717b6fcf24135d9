//! Host configuration parsed from environment variables.
//!
//! ERROR HANDLING
//! ==============
//! Unset variables fall back to defaults. A variable that is set but does not
//! parse is a startup error rather than a silent default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("http client init failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub port: u16,
    /// Backend API base URL, without a trailing `/`.
    pub api_upstream: String,
    pub proxy_timeout_secs: u64,
}

impl WebConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `NOTENEST_API_URL`: default `http://localhost:8000/api`
    /// - `NOTENEST_PROXY_TIMEOUT_SECS`: default 30, must be non-zero
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let api_upstream = lookup("NOTENEST_API_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let proxy_timeout_secs = parse_or(&lookup, "NOTENEST_PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?;
        if proxy_timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "NOTENEST_PROXY_TIMEOUT_SECS", value: "0".to_owned() });
        }

        Ok(Self { port, api_upstream, proxy_timeout_secs })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
