#![cfg(feature = "server")]
use anyhow::{anyhow, Result};
use reqwest::Url;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct AqiApiConfig {
    pub url: Option<String>,
    pub token: Option<String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl AqiApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset, numbers that
    /// don't parse keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let secs = |key: &str, default: u64| {
            get(key)
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(default)
        };
        Self {
            url: get("AQI_API_URL"),
            token: get("AQI_API_TOKEN"),
            timeout: Duration::from_secs(secs("AQI_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
            connect_timeout: Duration::from_secs(secs(
                "AQI_API_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )),
        }
    }

    pub fn url(&self) -> Result<&str> {
        self.url
            .as_deref()
            .ok_or_else(|| anyhow!("AQI_API_URL not set"))
    }

    pub fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

/// Scheme, host and port of `url`, safe to log.
pub fn url_origin(url: &str) -> String {
    match Url::parse(url) {
        Ok(u) => match (u.host_str(), u.port()) {
            (Some(host), Some(port)) => format!("{}://{}:{}", u.scheme(), host, port),
            (Some(host), None) => format!("{}://{}", u.scheme(), host),
            (None, _) => format!("{}://", u.scheme()),
        },
        Err(_) => "<invalid url>".to_string(),
    }
}
