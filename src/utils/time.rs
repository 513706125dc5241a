//! Time utilities: parsing HH:MM, combining date + time into UTC instants.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn parse_required_time(s: &str) -> AppResult<NaiveTime> {
    parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Combine a calendar day and a wall-clock time into a UTC instant.
pub fn at(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

/// Clock-time rendering used for sheet rows and exports (HH:MM:SS).
pub fn clock_str(ts: &DateTime<Utc>) -> String {
    ts.format("%H:%M:%S").to_string()
}
