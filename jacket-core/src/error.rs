use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing WEATHER_API_KEY environment variable")]
    MissingApiKey,
}

/// Failures while fetching or decoding a forecast. None of these are retried.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Failed to reach WeatherAPI.com: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Weather API not available (status {0})")]
    Status(u16),

    #[error("Failed to parse WeatherAPI forecast JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("WeatherAPI response contained no forecastday data")]
    NoForecastDay,
}
