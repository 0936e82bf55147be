use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trip::{Event, EventPriority, EventStatus, EventType};

/// Multi-field filter criteria applied read-only to an event collection.
///
/// Every supplied field must match (criteria are ANDed); an empty list or
/// `None` imposes no constraint. Never mutates or reorders the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFilter {
    #[serde(default)]
    pub types: Vec<EventType>,
    #[serde(default)]
    pub parks: Vec<String>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub priorities: Vec<EventPriority>,
    #[serde(default)]
    pub statuses: Vec<EventStatus>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    #[serde(default)]
    pub query: Option<String>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        if !self.types.is_empty() && !self.types.contains(&event.event_type) {
            return false;
        }
        if !self.priorities.is_empty() && !self.priorities.contains(&event.priority) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&event.status) {
            return false;
        }
        if !self.parks.is_empty() {
            let Some(park_id) = &event.park_id else {
                return false;
            };
            if !self.parks.contains(park_id) {
                return false;
            }
        }
        // Tag and participant criteria pass on any shared entry.
        if !self.tags.is_empty() && !intersects(&self.tags, &event.tags) {
            return false;
        }
        if !self.participants.is_empty() && !intersects(&self.participants, &event.participants) {
            return false;
        }
        if let Some(from) = self.date_from {
            if event.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if event.date > to {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            if !needle.is_empty() && !search_haystack(event).contains(&needle) {
                return false;
            }
        }
        true
    }
}

/// Apply `filter` to `events`, preserving input order.
pub fn filter_events(events: &[Event], filter: &EventFilter) -> Vec<Event> {
    events
        .iter()
        .filter(|event| filter.matches(event))
        .cloned()
        .collect()
}

fn intersects(wanted: &[String], present: &[String]) -> bool {
    wanted.iter().any(|w| present.iter().any(|p| p == w))
}

/// Lowercased free-text search target: title, notes, location, and tags.
fn search_haystack(event: &Event) -> String {
    let mut haystack = event.title.clone();
    if let Some(notes) = &event.notes {
        haystack.push(' ');
        haystack.push_str(notes);
    }
    if let Some(location) = &event.location {
        haystack.push(' ');
        haystack.push_str(location);
    }
    for tag in &event.tags {
        haystack.push(' ');
        haystack.push_str(tag);
    }
    haystack.to_lowercase()
}
