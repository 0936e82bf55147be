use crate::error::TripError;
use chrono::{NaiveDate, NaiveTime};

/// Parse an ISO `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TripError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| TripError::InvalidDate(s.to_string()))
}

/// Parse a `HH:MM` 24-hour time-of-day string.
///
/// Seconds are deliberately rejected; event times carry day-planning
/// granularity only.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, TripError> {
    // chrono accepts single-digit hours for %H; require the zero-padded form
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes.iter().enumerate().all(|(i, b)| i == 2 || b.is_ascii_digit());
    if !well_formed {
        return Err(TripError::InvalidTime(s.to_string()));
    }
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| TripError::InvalidTime(s.to_string()))
}

pub fn format_time_of_day(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
