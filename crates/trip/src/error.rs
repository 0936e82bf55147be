use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripError {
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM, 24-hour)")]
    InvalidTime(String),

    #[error("End time {end} is not after start time {start}")]
    TimeWindowInverted { start: String, end: String },
}
