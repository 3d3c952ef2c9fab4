//! Reduction of per-station readings to a single current value.

use crate::model::{CurrentConditions, ReadingsResponse, StationReading};

/// Stations along the east coast, closest to the cleanup sites.
pub const EAST_STATIONS: [&str; 3] = ["Pasir Ris", "Changi", "East Coast Parkway"];

/// Lower-case a station name and join its words with `_`, e.g. `east_coast_parkway`.
pub fn normalize_station(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Selects readings from an allow-list of stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationFilter {
    needles: Vec<String>,
}

impl Default for StationFilter {
    fn default() -> Self {
        Self::new(EAST_STATIONS)
    }
}

impl StationFilter {
    pub fn new<I, S>(stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let needles = stations
            .into_iter()
            .map(|s| normalize_station(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();
        Self { needles }
    }

    fn matches(&self, station_id: &str, station_name: Option<&str>) -> bool {
        let id = station_id.to_lowercase();
        let name = station_name.map(normalize_station);

        self.needles.iter().any(|needle| {
            id.contains(needle.as_str())
                || name.as_deref().is_some_and(|n| n.contains(needle.as_str()))
        })
    }

    /// Rounded mean of the allow-listed stations, or of every station when
    /// none of them reported. `None` when no numeric value is available.
    pub fn average(&self, response: &ReadingsResponse) -> Option<i64> {
        let readings = &response.items.first()?.readings;

        let matched: Vec<&StationReading> = readings
            .iter()
            .filter(|r| self.matches(&r.station_id, response.station_name(&r.station_id)))
            .collect();

        if matched.is_empty() {
            tracing::debug!(count = readings.len(), "no allow-listed station reported, averaging all");
            rounded_mean(readings.iter().filter_map(|r| r.value))
        } else {
            rounded_mean(matched.iter().filter_map(|r| r.value))
        }
    }

    pub fn current_conditions(
        &self,
        temperature: &ReadingsResponse,
        humidity: &ReadingsResponse,
        wind: &ReadingsResponse,
    ) -> CurrentConditions {
        CurrentConditions {
            temperature: self.average(temperature),
            humidity: self.average(humidity),
            wind_speed: self.average(wind),
        }
    }
}

/// Arithmetic mean rounded to the nearest integer, halves rounding up.
pub fn rounded_mean<I>(values: I) -> Option<i64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return None;
    }

    Some((sum / count as f64 + 0.5).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ReadingsItem, ReadingsMetadata, Station};

    fn reading(station_id: &str, value: Option<f64>) -> StationReading {
        StationReading { station_id: station_id.to_string(), value }
    }

    fn response(readings: Vec<StationReading>) -> ReadingsResponse {
        ReadingsResponse {
            metadata: ReadingsMetadata::default(),
            items: vec![ReadingsItem { timestamp: None, readings }],
        }
    }

    #[test]
    fn normalizes_station_names() {
        assert_eq!(normalize_station("East Coast  Parkway"), "east_coast_parkway");
        assert_eq!(normalize_station("Changi"), "changi");
    }

    #[test]
    fn averages_matched_stations_only() {
        let data = response(vec![
            reading("pasir_ris_s1", Some(30.0)),
            reading("changi_s2", Some(27.0)),
            reading("woodlands", Some(10.0)),
        ]);

        assert_eq!(StationFilter::default().average(&data), Some(29));
    }

    #[test]
    fn falls_back_to_all_stations_when_none_match() {
        let data = response(vec![reading("S24", Some(28.0)), reading("S43", Some(31.0))]);

        assert_eq!(StationFilter::default().average(&data), Some(30));
    }

    #[test]
    fn matches_on_metadata_station_name() {
        let mut data = response(vec![reading("S24", Some(26.0)), reading("S50", Some(34.0))]);
        data.metadata.stations = vec![
            Station { id: "S24".into(), name: Some("Changi".into()) },
            Station { id: "S50".into(), name: Some("Clementi Road".into()) },
        ];

        assert_eq!(StationFilter::default().average(&data), Some(26));
    }

    #[test]
    fn null_values_are_skipped() {
        let data = response(vec![reading("changi", None), reading("changi_b", Some(24.4))]);
        assert_eq!(StationFilter::default().average(&data), Some(24));
    }

    #[test]
    fn returns_none_without_numeric_values() {
        let filter = StationFilter::default();

        assert_eq!(filter.average(&ReadingsResponse::default()), None);
        assert_eq!(filter.average(&response(vec![])), None);
        assert_eq!(filter.average(&response(vec![reading("changi", None)])), None);
    }

    #[test]
    fn reading_matching_by_id_and_name_counts_once() {
        let mut data = response(vec![
            reading("changi_s24", Some(30.0)),
            reading("S107", Some(24.0)),
            reading("S50", Some(10.0)),
        ]);
        data.metadata.stations = vec![
            Station { id: "changi_s24".into(), name: Some("Changi".into()) },
            Station { id: "S107".into(), name: Some("East Coast Parkway".into()) },
            Station { id: "S50".into(), name: Some("Clementi Road".into()) },
        ];

        // counting changi_s24 twice would give 28
        assert_eq!(StationFilter::default().average(&data), Some(27));
    }

    #[test]
    fn matched_stations_without_values_do_not_fall_back() {
        let data = response(vec![reading("changi", None), reading("S99", Some(31.0))]);
        assert_eq!(StationFilter::default().average(&data), None);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(rounded_mean([28.0, 29.0]), Some(29));
        assert_eq!(rounded_mean([-0.5]), Some(0));
        assert_eq!(rounded_mean(std::iter::empty()), None);
    }

    #[test]
    fn custom_allow_list() {
        let filter = StationFilter::new(["Sentosa"]);
        let data = response(vec![reading("sentosa", Some(30.0)), reading("changi", Some(20.0))]);
        assert_eq!(filter.average(&data), Some(30));
    }
}
