//! Core library for the `jacket` CLI.
//!
//! This crate defines:
//! - Configuration (the API key and endpoint)
//! - The WeatherAPI.com forecast client behind the [`ForecastSource`] trait
//! - The forecast data model
//! - The jacket heuristic and the report shown to the user
//!
//! It is used by `jacket-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod jacket;
pub mod model;
pub mod provider;
pub mod report;

pub use config::Config;
pub use error::{ConfigError, ForecastError};
pub use jacket::{Recommendation, needs_jacket, needs_jacket_in};
pub use model::{ForecastResponse, HourlyEntry};
pub use provider::{ForecastSource, WeatherApiClient};
pub use report::{Report, TableRow};
