use crate::error::TripError;
use crate::types::{
    CrowdLevel, EventPriority, EventStatus, EventType, TravelMode, WeatherCondition,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Dining or experience reservation attached to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub name: String,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    pub party_size: u32,
    #[serde(default)]
    pub confirmation: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
}

/// Point-in-time weather estimate for the event's calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub condition: WeatherCondition,
    pub high_f: i32,
    pub low_f: i32,
    /// Chance of precipitation, 0-100.
    pub precipitation_chance: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transportation {
    pub mode: TravelMode,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub depart_from: Option<String>,
    #[serde(default)]
    pub arrive_at: Option<String>,
}

/// Planned vs. tracked spend for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub estimated: f64,
    #[serde(default)]
    pub actual: Option<f64>,
    pub currency: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub task: String,
    pub completed: bool,
    #[serde(default)]
    pub due_time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderChannel {
    Push,
    Email,
    Sms,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub enabled: bool,
    /// Lead time before the event's start, in minutes.
    pub lead_minutes: u32,
    pub channel: ReminderChannel,
}

/// A single calendar entry in a vacation itinerary.
///
/// Events are day-granular; `start_time`/`end_time` refine the position
/// within the day and are optional. When both are present the window is
/// treated as half-open `[start, end)` for conflict purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    pub event_type: EventType,
    pub priority: EventPriority,
    pub status: EventStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub park_id: Option<String>,
    #[serde(default)]
    pub attraction_id: Option<String>,
    #[serde(default)]
    pub crowd_level: Option<CrowdLevel>,
    #[serde(default)]
    pub reservation: Option<Reservation>,
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
    #[serde(default)]
    pub transportation: Option<Transportation>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub reminder: Option<Reminder>,
}

impl Event {
    /// Create a planned, medium-priority event with no optional detail.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        event_type: EventType,
    ) -> Self {
        Event {
            id: id.into(),
            title: title.into(),
            date,
            start_time: None,
            end_time: None,
            event_type,
            priority: EventPriority::Medium,
            status: EventStatus::Planned,
            notes: None,
            location: None,
            tags: Vec::new(),
            participants: Vec::new(),
            park_id: None,
            attraction_id: None,
            crowd_level: None,
            reservation: None,
            weather: None,
            transportation: None,
            budget: None,
            checklist: Vec::new(),
            reminder: None,
        }
    }

    /// The event's timed window, if it has both a start and an end.
    pub fn time_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Check the end-after-start invariant for events carrying a window.
    pub fn check_time_window(&self) -> Result<(), TripError> {
        if let Some((start, end)) = self.time_window() {
            if end <= start {
                return Err(TripError::TimeWindowInverted {
                    start: crate::time::format_time_of_day(start),
                    end: crate::time::format_time_of_day(end),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_window_requires_both_ends() {
        let mut event = Event::new(
            "e1",
            "Space Mountain",
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            EventType::Park,
        );
        assert!(event.time_window().is_none());

        event.start_time = Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert!(event.time_window().is_none());

        event.end_time = Some(NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert!(event.time_window().is_some());
    }

    #[test]
    fn test_check_time_window_rejects_inverted() {
        let mut event = Event::new(
            "e1",
            "Dinner",
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            EventType::Dining,
        );
        event.start_time = Some(NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        event.end_time = Some(NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert!(event.check_time_window().is_err());

        event.end_time = event.start_time;
        assert!(event.check_time_window().is_err(), "zero-length window is invalid");

        event.end_time = Some(NaiveTime::from_hms_opt(20, 30, 0).unwrap());
        assert!(event.check_time_window().is_ok());
    }
}
