#![cfg(feature = "server")]
use crate::backend::config::{url_origin, AqiApiConfig};
use crate::shared::types::AqiSnapshot;
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use dioxus::logger::tracing::{debug, info, warn};
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde::Deserialize;
use std::error::Error as _;

static AQI_CLIENT: OnceCell<AqiClient> = OnceCell::new();

/// HTTP client bound to one upstream configuration.
#[derive(Debug, Clone)]
pub struct AqiClient {
    config: AqiApiConfig,
    http: Client,
}

impl AqiClient {
    pub fn new(config: AqiApiConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .context("building AQI HTTP client")?;
        Ok(Self { config, http })
    }

    pub async fn fetch_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        // Only scheme and host go to logs and errors; the rest may carry a key
        let origin = url_origin(url);
        info!("[aqi] GET {}", origin);
        let mut req = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .header("Cache-Control", "no-store");
        if let Some(auth) = self.config.auth_header() {
            req = req.header("Authorization", auth);
        }
        let res = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                let e = e.without_url();
                warn!("[aqi] request error on GET {}: {}", origin, e);
                if e.is_timeout() {
                    warn!(
                        "[aqi] hint: request timed out (client timeout {:?})",
                        self.config.timeout
                    );
                }
                if e.is_connect() {
                    warn!("[aqi] hint: connection failed (DNS/route/refused/TLS). Check AQI_API_URL");
                }
                let mut chain = Vec::new();
                let mut src: Option<&dyn std::error::Error> = e.source();
                while let Some(s) = src {
                    chain.push(s.to_string());
                    src = s.source();
                }
                if !chain.is_empty() {
                    debug!("[aqi] error chain: {}", chain.join(" -> "));
                }
                return Err(anyhow!("sending GET {}: {}", origin, e));
            }
        };
        if !res.status().is_success() {
            let status = res.status();
            let bytes = res.bytes().await.unwrap_or_default();
            warn!(
                "[aqi] request failed: status={} body=\n{}",
                status,
                body_snippet(&bytes)
            );
            return Err(anyhow!("GET {} failed with status {}", origin, status));
        }
        let bytes = res
            .bytes()
            .await
            .with_context(|| format!("reading body from GET {}", origin))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            anyhow!(
                "decoding JSON from GET {} failed: {}\nBody snippet: {}",
                origin,
                e,
                body_snippet(&bytes)
            )
        })
    }

    pub async fn fetch_current(&self) -> Result<AqiSnapshot> {
        let url = self.config.url()?;
        let snapshot: AqiSnapshot = self.fetch_json(url).await?;
        match reading_age_minutes(&snapshot.current.timestamp, Utc::now()) {
            Some(age) => info!(
                "[aqi] {}: AQI {} (pm10 {}) at {} (age: {} min)",
                snapshot.location,
                snapshot.current.value,
                snapshot.pm10.value,
                snapshot.current.timestamp,
                age
            ),
            None => warn!(
                "[aqi] {}: could not parse reading timestamp {:?}",
                snapshot.location, snapshot.current.timestamp
            ),
        }
        Ok(snapshot)
    }
}

fn body_snippet(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).chars().take(300).collect()
}

fn reading_age_minutes(timestamp: &str, now: DateTime<Utc>) -> Option<i64> {
    let taken = DateTime::parse_from_rfc3339(timestamp).ok()?;
    Some((now - taken.with_timezone(&Utc)).num_minutes())
}

/// Fetch with the process-wide client configured from the environment.
pub async fn fetch_current_aqi() -> Result<AqiSnapshot> {
    let client = AQI_CLIENT.get_or_try_init(|| AqiClient::new(AqiApiConfig::from_env()))?;
    client.fetch_current().await
}
