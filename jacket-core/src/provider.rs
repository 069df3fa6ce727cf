use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::ForecastError, model::ForecastResponse};

pub mod weatherapi;

pub use weatherapi::WeatherApiClient;

/// Something that can produce today's forecast for the caller's location.
///
/// The location is implicit: the HTTP implementation lets the API resolve
/// it from the caller's IP address.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch_forecast(&self) -> Result<ForecastResponse, ForecastError>;
}
