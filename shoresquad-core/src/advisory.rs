use serde::Serialize;

/// Cleanup suitability derived from the day's forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    NotIdeal,
    Fair,
    Good,
    Perfect,
}

impl Advisory {
    /// Temperatures strictly above this get the hydration tier.
    pub const HOT_THRESHOLD_C: f64 = 32.0;

    /// Classify a forecast description. Storm terms beat rain terms, which
    /// beat the temperature check.
    pub fn classify(forecast: &str, temperature: Option<f64>) -> Self {
        let description = forecast.to_lowercase();

        if description.contains("thunder") || description.contains("heavy rain") {
            return Advisory::NotIdeal;
        }
        if description.contains("rain") || description.contains("showers") {
            return Advisory::Fair;
        }
        match temperature {
            Some(t) if t > Self::HOT_THRESHOLD_C => Advisory::Good,
            _ => Advisory::Perfect,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Advisory::NotIdeal => "Not ideal - storms expected",
            Advisory::Fair => "Fair - light rain possible",
            Advisory::Good => "Good - stay hydrated!",
            Advisory::Perfect => "Perfect for beach cleanup!",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Advisory::NotIdeal => "#FF6B6B",
            Advisory::Fair => "#FFA500",
            Advisory::Good | Advisory::Perfect => "#4ECDC4",
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Emoji shown next to a forecast description.
pub fn weather_icon(forecast: &str) -> &'static str {
    let description = forecast.to_lowercase();

    if description.contains("thunder") {
        "⛈️"
    } else if description.contains("rain") || description.contains("showers") {
        "🌧️"
    } else if description.contains("cloudy") {
        "☁️"
    } else if description.contains("partly") {
        "⛅"
    } else if description.contains("fair") || description.contains("sunny") {
        "☀️"
    } else {
        "🌤️"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storm_terms_win_regardless_of_temperature() {
        for text in ["Thundery Showers", "Heavy Rain", "Afternoon thundery showers", "HEAVY RAIN later"] {
            for temp in [None, Some(20.0), Some(33.0), Some(40.0)] {
                assert_eq!(Advisory::classify(text, temp), Advisory::NotIdeal, "{text} {temp:?}");
            }
        }
    }

    #[test]
    fn rain_terms_map_to_fair() {
        assert_eq!(Advisory::classify("Light Rain", Some(35.0)), Advisory::Fair);
        assert_eq!(Advisory::classify("Passing Showers", None), Advisory::Fair);
    }

    #[test]
    fn hot_days_without_rain_map_to_good() {
        assert_eq!(Advisory::classify("Fair and Warm", Some(33.0)), Advisory::Good);
        assert_eq!(Advisory::classify("Fair and Warm", Some(32.0)), Advisory::Perfect);
        assert_eq!(Advisory::classify("Fair and Warm", None), Advisory::Perfect);
    }

    #[test]
    fn tiers_carry_message_and_color() {
        assert_eq!(Advisory::NotIdeal.color(), "#FF6B6B");
        assert_eq!(Advisory::Fair.color(), "#FFA500");
        assert_eq!(Advisory::Good.message(), "Good - stay hydrated!");
        assert_eq!(Advisory::Perfect.to_string(), "Perfect for beach cleanup!");
    }

    #[test]
    fn icon_follows_keyword_order() {
        assert_eq!(weather_icon("Thundery Showers"), "⛈️");
        assert_eq!(weather_icon("Showers"), "🌧️");
        assert_eq!(weather_icon("Partly Cloudy"), "☁️");
        assert_eq!(weather_icon("Partly Sunny"), "⛅");
        assert_eq!(weather_icon("Fair (Day)"), "☀️");
        assert_eq!(weather_icon("Hazy"), "🌤️");
    }
}
