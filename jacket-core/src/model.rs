//! Decoded shape of a WeatherAPI.com `forecast.json` response.
//!
//! Only the fields the CLI consumes are declared; serde ignores the rest.
//! Field names on the wire are the API's and must stay as they are.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ForecastError;

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub location: Location,
    pub current: Current,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Current {
    #[serde(rename = "temp_f")]
    pub temperature_f: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    #[serde(rename = "forecastday")]
    pub days: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    #[serde(rename = "hour")]
    pub hours: Vec<HourlyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlyEntry {
    #[serde(rename = "time_epoch", with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,

    #[serde(rename = "temp_f")]
    pub temperature_f: f64,

    pub condition: Condition,

    /// Percent, 0-100. Missing means 0.
    #[serde(default)]
    pub chance_of_rain: f64,

    /// Only sent when `aqi=yes`; never read.
    #[serde(default)]
    pub air_quality: Option<f64>,
}

impl ForecastResponse {
    /// Hourly entries of the first forecast day, in API order.
    pub fn today(&self) -> Result<&[HourlyEntry], ForecastError> {
        self.forecast
            .days
            .first()
            .map(|day| day.hours.as_slice())
            .ok_or(ForecastError::NoForecastDay)
    }
}

/// Decode a fully buffered response body.
pub fn decode(body: &[u8]) -> Result<ForecastResponse, ForecastError> {
    Ok(serde_json::from_slice(body)?)
}
