use crate::event::Event;
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A planned day at a specific park, as stored with the vacation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkDay {
    pub date: NaiveDate,
    pub park_id: String,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Parent aggregate for a trip: date span, sparse park-day entries, and the
/// user-authored events persisted with it.
///
/// Vacations own their events; derived events (park days, travel, weather)
/// are synthesized at load time by the generator and never stored back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacation {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub park_days: Vec<ParkDay>,
    #[serde(default)]
    pub stored_events: Vec<Event>,
}

impl Vacation {
    /// Whether a date falls within the vacation's inclusive span.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of calendar days in the span, inclusive of both ends.
    pub fn num_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Every calendar day of the vacation in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::with_capacity(self.num_days().max(0) as usize);
        let mut current = self.start_date;
        while current <= self.end_date {
            days.push(current);
            current += Duration::days(1);
        }
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacation(start: (i32, u32, u32), end: (i32, u32, u32)) -> Vacation {
        Vacation {
            id: "v1".to_string(),
            name: "Spring Trip".to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            park_days: Vec::new(),
            stored_events: Vec::new(),
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        let v = vacation((2024, 3, 1), (2024, 3, 8));
        assert!(v.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(v.contains(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()));
        assert!(!v.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!v.contains(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()));
    }

    #[test]
    fn test_days_spans_both_ends() {
        let v = vacation((2024, 3, 1), (2024, 3, 8));
        let days = v.days();
        assert_eq!(days.len(), 8);
        assert_eq!(v.num_days(), 8);
        assert_eq!(days[0], v.start_date);
        assert_eq!(days[7], v.end_date);
    }

    #[test]
    fn test_single_day_vacation() {
        let v = vacation((2024, 7, 4), (2024, 7, 4));
        assert_eq!(v.days(), vec![v.start_date]);
        assert_eq!(v.num_days(), 1);
    }
}
