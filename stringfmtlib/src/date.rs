//! Date and time rendering by style pair.
//!
//! A thin layer over chrono: each [`DateStyle`] pair selects a fixed
//! strftime pattern, and chrono does the actual rendering. Patterns are
//! fixed English conventions; locale negotiation is out of scope.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Verbosity of the date or time portion of a rendered timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateStyle {
    /// Omit this portion entirely
    #[default]
    None,
    /// `3/5/24` / `2:30 PM`
    Short,
    /// `Mar 5, 2024` / `2:30:45 PM`
    Medium,
    /// `March 5, 2024` / `2:30:45 PM +00:00`
    Long,
    /// `Tuesday, March 5, 2024` / `2:30:45 PM +00:00`
    Full,
}

impl DateStyle {
    fn date_pattern(self) -> Option<&'static str> {
        match self {
            DateStyle::None => None,
            DateStyle::Short => Some("%-m/%-d/%y"),
            DateStyle::Medium => Some("%b %-d, %Y"),
            DateStyle::Long => Some("%B %-d, %Y"),
            DateStyle::Full => Some("%A, %B %-d, %Y"),
        }
    }

    fn time_pattern(self) -> Option<&'static str> {
        match self {
            DateStyle::None => None,
            DateStyle::Short => Some("%-I:%M %p"),
            DateStyle::Medium => Some("%-I:%M:%S %p"),
            DateStyle::Long | DateStyle::Full => Some("%-I:%M:%S %p %:z"),
        }
    }
}

/// Renders timestamps under a date-style / time-style pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateFormatter {
    /// Style for the date portion
    pub date: DateStyle,
    /// Style for the time portion
    pub time: DateStyle,
}

impl DateFormatter {
    /// Create a formatter with the given date and time styles.
    pub fn format(date: DateStyle, time: DateStyle) -> Self {
        Self { date, time }
    }

    /// Render `value` under this style pair. Both portions set to
    /// [`DateStyle::None`] yield the empty string.
    pub fn string_from<Tz: TimeZone>(&self, value: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        let date = self.date.date_pattern();
        let time = self.time.time_pattern();
        let pattern = match (date, time) {
            (Some(d), Some(t)) => format!("{} {}", d, t),
            (Some(d), None) => d.to_string(),
            (None, Some(t)) => t.to_string(),
            (None, None) => return String::new(),
        };
        value.format(&pattern).to_string()
    }
}
