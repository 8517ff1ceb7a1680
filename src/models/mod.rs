//! Data models for the CityScout API
//!
//! This module contains the records returned to callers, organized by concern:
//! - Location: Geocoded place for a caller-supplied city
//! - Weather: One forecast day in the provider's daily window
//! - Trail: One hiking trail near a coordinate pair

pub mod location;
pub mod trail;
pub mod weather;

// Re-export all public types for convenient access
pub use location::Location;
pub use trail::Trail;
pub use weather::DailyForecast;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{Result, error::CityScoutError};

/// Render a calendar date as the fixed weekday-month-day-year string the
/// API promises, independent of locale (e.g. `Sat Jan 09 2021`).
pub(crate) fn humanize_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Parse an upstream `YYYY-MM-DD` date field.
pub(crate) fn parse_calendar_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CityScoutError::InvalidDate(raw.to_string()))
}

/// Parse an upstream `YYYY-MM-DD HH:MM:SS` condition timestamp.
pub(crate) fn parse_condition_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map_err(|_| CityScoutError::InvalidDate(raw.to_string()))
}
