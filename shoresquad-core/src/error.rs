/// Errors raised while fetching or decoding weather data.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error while requesting {endpoint}: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} responded with status {status}: {body}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse {endpoint} JSON: {source}")]
    Parse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised when resolving the user's position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Geolocation not supported")]
    Unsupported,
    #[error("Location permission denied")]
    Denied,
}
