use crate::weather::WeatherProvider;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;
use trip::{
    ChecklistItem, CrowdLevel, Event, EventPriority, EventStatus, EventType, ParkDay,
    Transportation, TravelMode, Vacation,
};

/// Tasks attached to every generated park day.
const PARK_DAY_CHECKLIST: [&str; 3] = ["Pack sunscreen", "Charge devices", "Review park map"];

/// Derives the full displayable event set for a vacation from its sparse
/// stored fields: one event per park day, arrival and departure travel
/// events, the user-authored stored events, and a weather annotation on the
/// first event of each calendar day.
pub struct EventGenerator<'a> {
    weather: &'a dyn WeatherProvider,
}

impl<'a> EventGenerator<'a> {
    pub fn new(weather: &'a dyn WeatherProvider) -> Self {
        Self { weather }
    }

    /// Produce the candidate event set for calendar display.
    ///
    /// An absent vacation yields an empty set. Every emitted event's date
    /// lies within the vacation's inclusive span; stored records dated
    /// outside it are skipped with a warning rather than rendered.
    pub fn generate(&self, vacation: Option<&Vacation>) -> Vec<Event> {
        let Some(vacation) = vacation else {
            return Vec::new();
        };

        let mut events = Vec::new();

        // Once a derived event has been edited and persisted, the stored
        // copy supersedes the generated one.
        let stored_ids: HashSet<&str> = vacation
            .stored_events
            .iter()
            .map(|event| event.id.as_str())
            .collect();

        for park_day in &vacation.park_days {
            if !vacation.contains(park_day.date) {
                tracing::warn!(
                    date = %park_day.date,
                    park_id = %park_day.park_id,
                    "Skipping park day outside vacation span"
                );
                continue;
            }
            let event = park_day_event(park_day);
            if !stored_ids.contains(event.id.as_str()) {
                events.push(event);
            }
        }

        for (id, title, date) in [
            ("travel-arrival", "Arrival travel", vacation.start_date),
            ("travel-departure", "Departure travel", vacation.end_date),
        ] {
            if !stored_ids.contains(id) {
                events.push(travel_event(id, title, date));
            }
        }

        for stored in &vacation.stored_events {
            if !vacation.contains(stored.date) {
                tracing::warn!(
                    event_id = %stored.id,
                    date = %stored.date,
                    "Skipping stored event outside vacation span"
                );
                continue;
            }
            events.push(stored.clone());
        }

        self.annotate_weather(&mut events);
        events
    }

    /// Attach a forecast to the first event of each calendar day that does
    /// not already carry one.
    fn annotate_weather(&self, events: &mut [Event]) {
        let mut annotated_days: HashSet<NaiveDate> = events
            .iter()
            .filter(|event| event.weather.is_some())
            .map(|event| event.date)
            .collect();

        for event in events.iter_mut() {
            if annotated_days.contains(&event.date) {
                continue;
            }
            if let Some(snapshot) = self.weather.forecast(event.date) {
                event.weather = Some(snapshot);
                annotated_days.insert(event.date);
            }
        }
    }
}

fn park_day_event(park_day: &ParkDay) -> Event {
    let mut event = Event::new(
        format!("park-{}", park_day.date),
        format!("Park day: {}", park_day.park_id),
        park_day.date,
        EventType::Park,
    );
    event.priority = EventPriority::High;
    event.status = EventStatus::Confirmed;
    event.start_time = park_day.start_time;
    event.end_time = park_day.end_time;
    event.park_id = Some(park_day.park_id.clone());
    event.location = Some(park_day.park_id.clone());
    event.notes = park_day.notes.clone();
    event.crowd_level = Some(estimate_crowd_level(park_day.date));
    event.checklist = PARK_DAY_CHECKLIST
        .iter()
        .map(|task| ChecklistItem {
            task: (*task).to_string(),
            completed: false,
            due_time: None,
        })
        .collect();
    event
}

fn travel_event(id: &str, title: &str, date: NaiveDate) -> Event {
    let mut event = Event::new(id, title, date, EventType::Travel);
    event.priority = EventPriority::High;
    event.status = EventStatus::Confirmed;
    event.transportation = Some(Transportation {
        mode: TravelMode::Flight,
        carrier: None,
        depart_from: None,
        arrive_at: None,
    });
    event
}

/// Weekday-based crowd estimate; weekends and Fridays run heavier.
fn estimate_crowd_level(date: NaiveDate) -> CrowdLevel {
    match date.weekday() {
        Weekday::Sat => CrowdLevel::VeryHigh,
        Weekday::Sun => CrowdLevel::High,
        Weekday::Fri => CrowdLevel::High,
        Weekday::Mon | Weekday::Thu => CrowdLevel::Moderate,
        Weekday::Tue | Weekday::Wed => CrowdLevel::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crowd_level_weekend_heavier_than_midweek() {
        let saturday = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(estimate_crowd_level(saturday), CrowdLevel::VeryHigh);
        assert_eq!(estimate_crowd_level(tuesday), CrowdLevel::Low);
    }
}
