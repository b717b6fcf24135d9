//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no data of its own; it holds one pooled HTTP client for the API
//! proxy and the parsed config.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ConfigError, WebConfig};

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<WebConfig>,
}

impl AppState {
    /// Build the proxy client with the configured per-request timeout.
    pub fn new(config: WebConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
