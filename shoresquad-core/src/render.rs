//! HTML fragments for the events grid, the weather widget and the page shell.
//!
//! Every function builds its fragment from scratch, so re-rendering replaces
//! the previous content wholesale.

use std::fmt::Write as _;

use crate::{
    events::event_date_label,
    model::{CleanupEvent, WeatherView},
    notify::Toast,
};

/// Escape text for use in HTML bodies and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn event_card(event: &CleanupEvent) -> String {
    format!(
        r#"<div class="event-card">
    <div class="event-date">📅 {date}</div>
    <h4 class="event-title">{name}</h4>
    <div class="event-participants">👥 {participants} squad members joined</div>
    <button class="btn btn-primary">Join Cleanup</button>
</div>
"#,
        date = event_date_label(event.date),
        name = escape_html(&event.name),
        participants = event.participants,
    )
}

/// One card per event, in input order.
pub fn events_grid(events: &[CleanupEvent]) -> String {
    events.iter().map(event_card).collect()
}

fn current_section(view: &WeatherView) -> String {
    format!(
        r#"<div class="weather-current">
    <div class="weather-main">
        <div class="weather-icon">{icon}</div>
        <div>
            <div class="weather-temp">{temp}°C</div>
            <div class="weather-description">{description}</div>
        </div>
    </div>
    <div class="weather-today-details">
        <div class="weather-detail-inline">
            <span>💧 {humidity}%</span>
            <span>💨 {wind} km/h</span>
            <span>🌡️ {low}°C - {high}°C</span>
        </div>
    </div>
</div>
<div class="weather-detail weather-advisory" style="background: {color};">
    <div class="weather-detail-label">Cleanup Conditions</div>
    <div class="weather-detail-value">{advisory}</div>
</div>
"#,
        icon = view.icon,
        temp = view.temperature_c,
        description = escape_html(&view.description),
        humidity = view.humidity_pct,
        wind = view.wind_kmh,
        low = view.low_c,
        high = view.high_c,
        color = view.advisory.color(),
        advisory = view.advisory.message(),
    )
}

fn forecast_section(view: &WeatherView) -> String {
    let mut html = String::from(
        "<div class=\"forecast-section\">\n<h3>4-Day Forecast</h3>\n<div class=\"forecast-grid\">\n",
    );

    for card in &view.forecast {
        let _ = write!(
            html,
            r#"<div class="forecast-card">
    <div class="forecast-day">{day}</div>
    <div class="forecast-date">{date}</div>
    <div class="forecast-icon">{icon}</div>
    <div class="forecast-temps">
        <span class="temp-high">{high}°</span>
        <span class="temp-low">{low}°</span>
    </div>
    <div class="forecast-condition">{condition}</div>
</div>
"#,
            day = card.date.format("%a"),
            date = card.date.format("%b %-d"),
            icon = card.icon,
            high = card.high,
            low = card.low,
            condition = escape_html(&card.condition),
        );
    }

    html.push_str("</div>\n</div>\n");
    html
}

/// Inner HTML of the weather widget.
pub fn weather_widget(view: &WeatherView) -> String {
    let mut html = current_section(view);
    if view.is_sample {
        html.push_str("<p class=\"weather-sample-note\"><em>Sample data - API unavailable</em></p>\n");
    } else {
        html.push_str(&forecast_section(view));
    }
    html
}

pub fn toast(toast: &Toast) -> String {
    format!(
        "<div class=\"{class}\" role=\"status\" style=\"background: {bg};\">{message}</div>\n",
        class = toast.css_class(),
        bg = toast.background(),
        message = escape_html(&toast.message),
    )
}

/// Standalone page with the events grid, weather widget and any toasts.
pub fn page(events: &[CleanupEvent], view: &WeatherView, toasts: &[Toast]) -> String {
    let toasts: String = toasts.iter().map(toast).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>ShoreSquad - Rally your crew, track weather, and hit the next beach cleanup</title>
</head>
<body>
<section id="weather">
<h2>Beach Weather</h2>
<div id="weatherWidget" class="weather-widget">
{weather}</div>
</section>
<section id="events">
<h2>Upcoming Cleanups</h2>
<div id="eventsGrid" class="events-grid">
{events}</div>
</section>
{toasts}</body>
</html>
"#,
        weather = weather_widget(view),
        events = events_grid(events),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{events::sample_events, model::ForecastCard};
    use chrono::NaiveDate;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html(r#"<b>"Tom & Jerry's"</b>"#), "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;");
    }

    #[test]
    fn renders_one_card_per_event_in_order() {
        let events = sample_events();
        let html = events_grid(&events);

        assert_eq!(html.matches("class=\"event-card\"").count(), 3);

        let positions: Vec<_> = events.iter().map(|e| html.find(&e.name).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(html.contains("👥 25 squad members joined"));
        assert!(html.contains("👥 18 squad members joined"));
        assert!(html.contains("👥 32 squad members joined"));
        assert!(html.contains("📅 Sunday, Dec 7"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let view = WeatherView::fallback();
        assert_eq!(weather_widget(&view), weather_widget(&view));
    }

    #[test]
    fn fallback_widget_shows_fixed_values() {
        let html = weather_widget(&WeatherView::fallback());

        assert!(html.contains("28°C"));
        assert!(html.contains("Partly Cloudy"));
        assert!(html.contains("💧 75%"));
        assert!(html.contains("💨 15 km/h"));
        assert!(html.contains("🌡️ 26°C - 32°C"));
        assert!(html.contains("Perfect for beach cleanup!"));
        assert!(html.contains("Sample data - API unavailable"));
        assert!(!html.contains("forecast-card"));
    }

    #[test]
    fn live_widget_has_forecast_grid() {
        let mut view = WeatherView::fallback();
        view.is_sample = false;
        view.forecast = vec![ForecastCard {
            date: NaiveDate::from_ymd_opt(2025, 12, 8).unwrap(),
            icon: "🌧️",
            high: 31.0,
            low: 24.0,
            condition: "Showers".into(),
        }];

        let html = weather_widget(&view);
        assert!(html.contains("<div class=\"forecast-day\">Mon</div>"));
        assert!(html.contains("<div class=\"forecast-date\">Dec 8</div>"));
        assert!(html.contains("<span class=\"temp-high\">31°</span>"));
        assert!(!html.contains("Sample data"));
    }

    #[test]
    fn page_includes_toasts() {
        let html = page(&sample_events(), &WeatherView::fallback(), &[Toast::error("Using sample weather data")]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("notification-error"));
        assert!(html.contains("id=\"eventsGrid\""));
    }
}
