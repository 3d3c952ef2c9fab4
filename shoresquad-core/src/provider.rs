use crate::{
    Config,
    error::WeatherError,
    model::{ForecastResponse, ReadingKind, ReadingsResponse},
    provider::{nea::NeaProvider, sample::SampleProvider},
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod nea;
pub mod sample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Nea,
    Sample,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Nea => "nea",
            ProviderId::Sample => "sample",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Nea, ProviderId::Sample]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "nea" => Ok(ProviderId::Nea),
            "sample" => Ok(ProviderId::Sample),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: nea, sample."
            )),
        }
    }
}

/// Source of forecast and station readings.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn forecast(&self) -> Result<ForecastResponse, WeatherError>;

    async fn readings(&self, kind: ReadingKind) -> Result<ReadingsResponse, WeatherError>;
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let boxed: Box<dyn WeatherProvider> = match id {
        ProviderId::Nea => Box::new(NeaProvider::from_config(&config.nea)?),
        ProviderId::Sample => Box::new(SampleProvider::today()),
    };

    tracing::debug!(provider = %id, "weather provider ready");
    Ok(boxed)
}

/// Construct the default provider from config, using `default_provider` field.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let id = config.default_provider_id()?;
    provider_from_config(id, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn provider_id_as_str_roundtrip() {
        for id in ProviderId::all() {
            let s = id.as_str();
            let parsed = ProviderId::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn provider_id_is_case_insensitive() {
        assert_eq!(ProviderId::try_from("NEA").unwrap(), ProviderId::Nea);
    }

    #[test]
    fn unknown_provider_error() {
        let err = ProviderId::try_from("doesnotexist").unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[test]
    fn default_provider_from_config_works_without_file() {
        let cfg = Config::default();
        assert!(default_provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn default_provider_from_config_errors_on_unknown_id() {
        let cfg = Config { default_provider: Some("metoffice".into()), ..Config::default() };
        let err = default_provider_from_config(&cfg).unwrap_err();

        assert!(err.to_string().contains("Supported providers: nea, sample"));
    }
}
