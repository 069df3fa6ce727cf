//! The "do you need a jacket" rule.
//!
//! A jacket is recommended if any hour of the day is either cold during
//! waking hours or likely to rain.

use chrono::{Local, TimeZone, Timelike};
use tracing::info;

use crate::model::HourlyEntry;

/// Below this temperature (°F, exclusive) a daytime hour counts as cold.
pub const COLD_BELOW_F: f64 = 60.0;

/// Hours of the day (local time, inclusive) the cold check applies to.
pub const DAYTIME_HOURS: std::ops::RangeInclusive<u32> = 8..=22;

/// Above this chance of rain (percent, exclusive) any hour needs a jacket.
pub const RAIN_ABOVE_PERCENT: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Jacket,
    NoJacket,
}

impl Recommendation {
    pub fn from_needed(needed: bool) -> Self {
        if needed { Self::Jacket } else { Self::NoJacket }
    }

    pub fn is_jacket(self) -> bool {
        self == Self::Jacket
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Jacket => "You might need a jacket",
            Self::NoJacket => "You don't need a jacket",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Whether a single hour, seen in `tz`, calls for a jacket.
pub fn hour_needs_jacket<Tz: TimeZone>(hour: &HourlyEntry, tz: &Tz) -> bool {
    let hour_of_day = hour.time.with_timezone(tz).hour();

    (DAYTIME_HOURS.contains(&hour_of_day) && hour.temperature_f < COLD_BELOW_F)
        || hour.chance_of_rain > RAIN_ABOVE_PERCENT
}

/// [`needs_jacket_in`] using the machine's local time zone.
pub fn needs_jacket(hours: &[HourlyEntry]) -> bool {
    needs_jacket_in(hours, &Local)
}

pub fn needs_jacket_in<Tz: TimeZone>(hours: &[HourlyEntry], tz: &Tz) -> bool {
    match hours.iter().find(|h| hour_needs_jacket(h, tz)) {
        Some(hour) => {
            info!(
                time = %hour.time,
                temp_f = hour.temperature_f,
                chance_of_rain = hour.chance_of_rain,
                "jacket recommended"
            );
            true
        }
        None => {
            info!(hours = hours.len(), "no hour calls for a jacket");
            false
        }
    }
}
