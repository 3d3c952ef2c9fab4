use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    config::NeaConfig,
    error::WeatherError,
    model::{ForecastResponse, ReadingKind, ReadingsResponse},
};

use super::WeatherProvider;

const FORECAST_PATH: &str = "4-day-weather-forecast";

/// Client for the NEA environment endpoints on data.gov.sg.
#[derive(Debug, Clone)]
pub struct NeaProvider {
    base_url: String,
    http: Client,
}

impl NeaProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &NeaConfig) -> Result<Self> {
        Self::new(config.base_url.clone(), Duration::from_secs(config.timeout_secs))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, WeatherError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "requesting NEA endpoint");

        let res = self.http.get(&url).send().await.map_err(|source| WeatherError::Network {
            endpoint: path.to_string(),
            source,
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| WeatherError::Network {
            endpoint: path.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                endpoint: path.to_string(),
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| WeatherError::Parse {
            endpoint: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl WeatherProvider for NeaProvider {
    async fn forecast(&self) -> Result<ForecastResponse, WeatherError> {
        self.get_json(FORECAST_PATH).await
    }

    async fn readings(&self, kind: ReadingKind) -> Result<ReadingsResponse, WeatherError> {
        self.get_json(kind.as_str()).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let provider = NeaProvider::new("http://localhost:8080/v1/environment/", Duration::from_secs(1))
            .unwrap();

        assert_eq!(
            provider.endpoint(ReadingKind::WindSpeed.as_str()),
            "http://localhost:8080/v1/environment/wind-speed"
        );
    }

    #[test]
    fn truncates_long_bodies_on_char_boundary() {
        let long = "é".repeat(300);
        let truncated = truncate_body(&long);

        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
