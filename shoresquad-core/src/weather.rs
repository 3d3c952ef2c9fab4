//! Fetching the forecast and live readings and turning them into a [`WeatherView`].

use crate::{
    advisory::{Advisory, weather_icon},
    aggregate::StationFilter,
    error::WeatherError,
    model::{CurrentConditions, ForecastCard, ForecastResponse, ReadingKind, WeatherView},
    notify::Toast,
    provider::WeatherProvider,
};

/// Result of a weather load: what to display and an optional notice for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherOutcome {
    pub view: WeatherView,
    pub toast: Option<Toast>,
}

/// Fetch temperature, humidity and wind concurrently and average each set.
/// Any failed request fails the whole result.
pub async fn fetch_current_conditions(
    provider: &dyn WeatherProvider,
    filter: &StationFilter,
) -> Result<CurrentConditions, WeatherError> {
    let (temperature, humidity, wind) = tokio::try_join!(
        provider.readings(ReadingKind::Temperature),
        provider.readings(ReadingKind::Humidity),
        provider.readings(ReadingKind::WindSpeed),
    )?;

    Ok(filter.current_conditions(&temperature, &humidity, &wind))
}

/// Load everything the weather widget needs. Never fails: errors degrade to
/// [`WeatherView::fallback`] with an error toast.
pub async fn load_weather(provider: &dyn WeatherProvider, filter: &StationFilter) -> WeatherOutcome {
    let fetched = tokio::try_join!(provider.forecast(), fetch_current_conditions(provider, filter));

    match fetched {
        // an item without any forecast days is as broken as a failed request
        Ok((forecast, _)) if !forecast.items.is_empty() && forecast.days().is_none() => {
            tracing::warn!("forecast item has no days, showing sample data");
            sample_outcome()
        }
        Ok((forecast, current)) => {
            tracing::info!(?current, "weather loaded");
            WeatherOutcome { view: build_view(&forecast, &current), toast: None }
        }
        Err(err) => {
            tracing::warn!(error = %err, "weather fetch failed, showing sample data");
            sample_outcome()
        }
    }
}

fn sample_outcome() -> WeatherOutcome {
    WeatherOutcome {
        view: WeatherView::fallback(),
        toast: Some(Toast::error("Using sample weather data")),
    }
}

/// Combine today's forecast with the aggregated readings. A forecast without
/// any days yields the fallback view.
pub fn build_view(forecast: &ForecastResponse, current: &CurrentConditions) -> WeatherView {
    let Some(days) = forecast.days() else {
        return WeatherView::fallback();
    };
    let today = &days[0];

    let temperature = current.temperature.map(|t| t as f64);
    let advisory = Advisory::classify(&today.forecast, temperature);

    let forecast = days
        .iter()
        .map(|day| ForecastCard {
            date: day.date,
            icon: weather_icon(&day.forecast),
            high: day.temperature.high,
            low: day.temperature.low,
            condition: day.forecast.clone(),
        })
        .collect();

    WeatherView {
        icon: weather_icon(&today.forecast),
        temperature_c: temperature.unwrap_or(today.temperature.high),
        description: today.forecast.clone(),
        humidity_pct: current.humidity.unwrap_or(WeatherView::DEFAULT_HUMIDITY_PCT),
        wind_kmh: current.wind_speed.unwrap_or(WeatherView::DEFAULT_WIND_KMH),
        low_c: today.temperature.low,
        high_c: today.temperature.high,
        advisory,
        forecast,
        is_sample: false,
    }
}
