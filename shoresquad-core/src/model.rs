use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::advisory::Advisory;

/// A scheduled beach cleanup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupEvent {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub date: NaiveDate,
    pub participants: u32,
}

/// Which reading set to request from a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingKind {
    Temperature,
    Humidity,
    WindSpeed,
}

impl ReadingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingKind::Temperature => "air-temperature",
            ReadingKind::Humidity => "relative-humidity",
            ReadingKind::WindSpeed => "wind-speed",
        }
    }
}

/// A single sensor measurement tagged with its station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReading {
    pub station_id: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingsMetadata {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub reading_unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingsItem {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub readings: Vec<StationReading>,
}

/// Body of the NEA air-temperature, relative-humidity and wind-speed endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingsResponse {
    #[serde(default)]
    pub metadata: ReadingsMetadata,
    #[serde(default)]
    pub items: Vec<ReadingsItem>,
}

impl ReadingsResponse {
    pub fn station_name(&self, station_id: &str) -> Option<&str> {
        self.metadata
            .stations
            .iter()
            .find(|s| s.id == station_id)
            .and_then(|s| s.name.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub forecast: String,
    pub temperature: TemperatureRange,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastItem {
    #[serde(default)]
    pub forecasts: Vec<DayForecast>,
}

/// Body of the NEA 4-day-weather-forecast endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub items: Vec<ForecastItem>,
}

impl ForecastResponse {
    /// Forecast days of the latest item, if any.
    pub fn days(&self) -> Option<&[DayForecast]> {
        self.items
            .first()
            .map(|item| item.forecasts.as_slice())
            .filter(|days| !days.is_empty())
    }
}

/// Aggregated live readings. Each field is absent when no value was reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: Option<i64>,
    pub humidity: Option<i64>,
    pub wind_speed: Option<i64>,
}

/// One card of the multi-day forecast grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastCard {
    pub date: NaiveDate,
    pub icon: &'static str,
    pub high: f64,
    pub low: f64,
    pub condition: String,
}

/// Everything the weather widget displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub icon: &'static str,
    pub temperature_c: f64,
    pub description: String,
    pub humidity_pct: i64,
    pub wind_kmh: i64,
    pub low_c: f64,
    pub high_c: f64,
    pub advisory: Advisory,
    pub forecast: Vec<ForecastCard>,
    pub is_sample: bool,
}

impl WeatherView {
    pub const DEFAULT_HUMIDITY_PCT: i64 = 75;
    pub const DEFAULT_WIND_KMH: i64 = 15;

    /// Static view shown when live data cannot be fetched.
    pub fn fallback() -> Self {
        Self {
            icon: "⛅",
            temperature_c: 28.0,
            description: "Partly Cloudy".to_string(),
            humidity_pct: Self::DEFAULT_HUMIDITY_PCT,
            wind_kmh: Self::DEFAULT_WIND_KMH,
            low_c: 26.0,
            high_c: 32.0,
            advisory: Advisory::Perfect,
            forecast: Vec::new(),
            is_sample: true,
        }
    }
}
