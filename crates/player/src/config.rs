//! Client configuration from the environment.

use std::time::Duration;

use url::Url;

/// Default sheet backend address.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub const API_BASE_URL_VAR: &str = "FICHA_API_BASE_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "FICHA_REQUEST_TIMEOUT_MS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{var} must be an http(s) URL, got scheme '{scheme}'")]
    UnsupportedScheme { var: &'static str, scheme: String },
    #[error("{var} must be a positive number of milliseconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub api_base_url: Url,
    pub request_timeout: Duration,
}

impl PlayerConfig {
    /// Read `FICHA_API_BASE_URL` and `FICHA_REQUEST_TIMEOUT_MS`, falling back
    /// to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup(API_BASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = Url::parse(raw_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            var: API_BASE_URL_VAR,
            source,
        })?;
        if !matches!(api_base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                var: API_BASE_URL_VAR,
                scheme: api_base_url.scheme().to_string(),
            });
        }

        let request_timeout = match lookup(REQUEST_TIMEOUT_VAR) {
            None => Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            Some(value) => match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: REQUEST_TIMEOUT_VAR,
                        value,
                    })
                }
            },
        };

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }
}
