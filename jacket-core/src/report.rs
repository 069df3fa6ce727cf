//! Turns a decoded forecast into the lines and rows the CLI prints.
//!
//! Formatting decisions live here so they can be tested without a terminal;
//! the binary only draws borders and applies color.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

use crate::{
    error::ForecastError,
    jacket::{Recommendation, needs_jacket_in},
    model::{ForecastResponse, HourlyEntry},
};

pub const TABLE_HEADERS: [&str; 4] = ["Time", "Temperature", "Chance of Rain", "Condition"];

/// Rain cells at or above this percentage are emphasized.
///
/// Inclusive, unlike [`crate::jacket::RAIN_ABOVE_PERCENT`]: exactly 40% is
/// highlighted in the table without triggering the jacket on its own.
pub const RAIN_EMPHASIS_PERCENT: f64 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub time: String,
    pub temperature: String,
    pub chance_of_rain: String,
    pub condition: String,
    pub rain_emphasized: bool,
}

impl TableRow {
    fn from_hour<Tz>(hour: &HourlyEntry, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            time: hour.time.with_timezone(tz).format("%H:%M").to_string(),
            temperature: format!("{:.0}F", hour.temperature_f),
            chance_of_rain: format!("{:.0}%", hour.chance_of_rain),
            condition: hour.condition.text.clone(),
            rain_emphasized: hour.chance_of_rain >= RAIN_EMPHASIS_PERCENT,
        }
    }

    pub fn cells(&self) -> [&str; 4] {
        [&self.time, &self.temperature, &self.chance_of_rain, &self.condition]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub recommendation: Recommendation,
    pub summary: String,
    pub rows: Vec<TableRow>,
}

impl Report {
    /// The jacket rule looks at every hour of today; the table only lists
    /// hours strictly after `now`, in the order the API returned them.
    pub fn build<Tz>(
        forecast: &ForecastResponse,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Result<Self, ForecastError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let hours = forecast.today()?;

        let recommendation = Recommendation::from_needed(needs_jacket_in(hours, tz));

        let summary = format!(
            "{}, {}: {:.0}F, {}",
            forecast.location.name,
            forecast.location.country,
            forecast.current.temperature_f,
            forecast.current.condition.text,
        );

        let rows = hours
            .iter()
            .filter(|h| h.time > now)
            .map(|h| TableRow::from_hour(h, tz))
            .collect();

        Ok(Self { recommendation, summary, rows })
    }
}
