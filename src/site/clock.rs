//! Digital clock readings.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

/// What the clock widget displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockReading {
    /// `HH:MM:SS`, 24-hour, zero padded.
    pub time: String,
    /// Long US form, e.g. `Monday, March 4, 2024`.
    pub date: String,
}

impl ClockReading {
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            time: dt.format("%H:%M:%S").to_string(),
            date: dt.format("%A, %B %-d, %Y").to_string(),
        }
    }
}
