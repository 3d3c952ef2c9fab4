use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};

use crate::{
    error::WeatherError,
    model::{
        DayForecast, ForecastItem, ForecastResponse, ReadingKind, ReadingsItem, ReadingsMetadata,
        ReadingsResponse, Station, StationReading, TemperatureRange,
    },
};

use super::WeatherProvider;

const SAMPLE_DAYS: [(&str, f64, f64); 4] = [
    ("Partly Cloudy (Day)", 26.0, 32.0),
    ("Afternoon Showers", 25.0, 31.0),
    ("Fair and Warm", 26.0, 33.0),
    ("Thundery Showers", 24.0, 30.0),
];

/// Generates a plausible four-day forecast and east-coast readings locally.
#[derive(Debug, Clone)]
pub struct SampleProvider {
    start: NaiveDate,
}

impl SampleProvider {
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    fn readings_for(kind: ReadingKind) -> [(&'static str, &'static str, f64); 3] {
        let values = match kind {
            ReadingKind::Temperature => [28.4, 27.9, 28.6],
            ReadingKind::Humidity => [76.0, 74.5, 78.0],
            ReadingKind::WindSpeed => [14.2, 16.8, 13.5],
        };
        [
            ("pasir_ris", "Pasir Ris", values[0]),
            ("changi", "Changi", values[1]),
            ("east_coast_parkway", "East Coast Parkway", values[2]),
        ]
    }
}

#[async_trait]
impl WeatherProvider for SampleProvider {
    async fn forecast(&self) -> Result<ForecastResponse, WeatherError> {
        let forecasts = SAMPLE_DAYS
            .iter()
            .zip(0u64..)
            .map(|(&(text, low, high), offset)| DayForecast {
                date: self.start.checked_add_days(Days::new(offset)).unwrap_or(self.start),
                forecast: text.to_string(),
                temperature: TemperatureRange { low, high },
            })
            .collect();

        Ok(ForecastResponse { items: vec![ForecastItem { forecasts }] })
    }

    async fn readings(&self, kind: ReadingKind) -> Result<ReadingsResponse, WeatherError> {
        let rows = Self::readings_for(kind);

        Ok(ReadingsResponse {
            metadata: ReadingsMetadata {
                stations: rows
                    .iter()
                    .map(|(id, name, _)| Station { id: id.to_string(), name: Some(name.to_string()) })
                    .collect(),
                reading_unit: None,
            },
            items: vec![ReadingsItem {
                timestamp: None,
                readings: rows
                    .iter()
                    .map(|(id, _, value)| StationReading { station_id: id.to_string(), value: Some(*value) })
                    .collect(),
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn forecast_covers_four_consecutive_days() {
        let start = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
        let forecast = SampleProvider::new(start).forecast().await.unwrap();
        let days = forecast.days().unwrap();

        assert_eq!(days.len(), 4);
        assert_eq!(days[0].date, start);
        assert_eq!(days[3].date, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
    }

    #[tokio::test]
    async fn readings_come_from_east_stations() {
        let provider = SampleProvider::today();
        let temps = provider.readings(ReadingKind::Temperature).await.unwrap();

        assert_eq!(temps.items[0].readings.len(), 3);
        assert_eq!(temps.station_name("changi"), Some("Changi"));
    }
}
