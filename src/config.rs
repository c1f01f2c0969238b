use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::warn;

use crate::constants::{
    DEFAULT_EXPECTED_SNIPPET, DEFAULT_EXPECTED_STATUS, DEFAULT_REQUEST_TIMEOUT_MS,
    DEFAULT_TARGET_URL,
};

#[derive(Clone)]
pub(crate) struct Config {
    pub(crate) target_url: String,
    pub(crate) expected_status: u16,
    pub(crate) expected_snippet: String,
    pub(crate) request_timeout: Duration,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        let target_override = read_env_first(&["SMOKE_TARGET_URL", "TARGET_URL"]);
        if target_override.is_none() {
            warn!("SMOKE_TARGET_URL not set; defaulting to {}", DEFAULT_TARGET_URL);
        }
        let target_url = target_override.unwrap_or_else(|| DEFAULT_TARGET_URL.to_string());
        url::Url::parse(&target_url)
            .with_context(|| format!("Invalid target URL {}", target_url))?;

        let expected_status = env::var("SMOKE_EXPECTED_STATUS")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_EXPECTED_STATUS);

        let expected_snippet = read_env_first(&["SMOKE_EXPECTED_SNIPPET"])
            .unwrap_or_else(|| DEFAULT_EXPECTED_SNIPPET.to_string());

        let request_timeout = Duration::from_millis(
            env::var("SMOKE_TIMEOUT_MS")
                .ok()
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        );

        Ok(Self {
            target_url,
            expected_status,
            expected_snippet,
            request_timeout,
        })
    }
}

pub(crate) fn read_env_first(keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Ok(value) = env::var(key) {
            let trimmed = value.trim().to_string();
            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
    }
    None
}
