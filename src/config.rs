// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Runtime configuration sourced from environment variables.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Base URL of the backend API, e.g. `https://ops.example.com/api`.
pub const BASE_URL_VAR: &str = "OPSDECK_API_BASE_URL";
/// Optional per-request timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "OPSDECK_REQUEST_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{var} is not a valid URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },
    #[error("{var} must use http or https, got '{scheme}'")]
    UnsupportedScheme { var: &'static str, scheme: String },
    #[error("{var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Settings needed to talk to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: Url,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_base = lookup(BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(BASE_URL_VAR))?;

        let api_base_url = parse_base_url(&raw_base)?;

        let request_timeout = match lookup(TIMEOUT_VAR).map(|v| v.trim().to_string()) {
            None => DEFAULT_TIMEOUT,
            Some(v) if v.is_empty() => DEFAULT_TIMEOUT,
            Some(v) => match v.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: TIMEOUT_VAR,
                        value: v,
                    });
                }
            },
        };

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }
}

/// Parse the base URL and normalize it to end with `/` so relative joins keep any path prefix.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|err| ConfigError::InvalidUrl {
        var: BASE_URL_VAR,
        reason: err.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            var: BASE_URL_VAR,
            scheme: url.scheme().to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
