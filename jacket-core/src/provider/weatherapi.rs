use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{
    config::Config,
    error::ForecastError,
    model::{ForecastResponse, decode},
};

use super::ForecastSource;

/// Path of the forecast endpoint, relative to [`Config::base_url`].
pub const FORECAST_PATH: &str = "/v1/forecast.json";

/// WeatherAPI.com forecast client. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    config: Config,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(config: Config) -> Result<Self, ForecastError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    fn forecast_url(&self) -> String {
        format!("{}{}", self.config.base_url, FORECAST_PATH)
    }
}

#[async_trait]
impl ForecastSource for WeatherApiClient {
    async fn fetch_forecast(&self) -> Result<ForecastResponse, ForecastError> {
        let url = self.forecast_url();
        debug!(%url, "requesting forecast for auto:ip");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", "auto:ip"),
                ("days", "1"),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .map_err(transport)?;

        let status = res.status();
        if status != StatusCode::OK {
            debug!(%status, "forecast request rejected");
            return Err(ForecastError::Status(status.as_u16()));
        }

        let body = res.bytes().await.map_err(transport)?;
        debug!(bytes = body.len(), "forecast body received");

        let forecast = decode(&body)?;
        debug!(
            location = %forecast.location.name,
            days = forecast.forecast.days.len(),
            "forecast decoded"
        );

        Ok(forecast)
    }
}

// The request URL carries the API key as a query parameter.
fn transport(err: reqwest::Error) -> ForecastError {
    ForecastError::Transport(err.without_url())
}
