use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trip::{Event, EventType};

/// Two same-day events whose timed windows overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPair {
    pub date: NaiveDate,
    pub first_id: String,
    pub second_id: String,
}

/// Derived statistics over a (typically filtered) event set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItinerarySummary {
    pub counts_by_type: BTreeMap<EventType, usize>,
    pub budget_estimated: f64,
    pub budget_actual: f64,
    pub conflicts: Vec<ConflictPair>,
    pub recommendations: Vec<String>,
}

/// Half-open interval overlap: `[s1, e1)` meets `[s2, e2)` iff
/// `s1 < e2 && s2 < e1`. Touching boundaries do not overlap.
pub fn windows_overlap(
    first: (NaiveTime, NaiveTime),
    second: (NaiveTime, NaiveTime),
) -> bool {
    first.0 < second.1 && second.0 < first.1
}

/// Compute summary statistics for the current view. Pure; `today` anchors
/// the reminders-due-soon advisory.
pub fn summarize(events: &[Event], today: NaiveDate) -> ItinerarySummary {
    let mut summary = ItinerarySummary::default();

    for event in events {
        *summary.counts_by_type.entry(event.event_type).or_insert(0) += 1;
        if let Some(budget) = &event.budget {
            summary.budget_estimated += budget.estimated;
            summary.budget_actual += budget.actual.unwrap_or(0.0);
        }
    }

    summary.conflicts = detect_conflicts(events);
    summary.recommendations = recommendations(&summary, events, today);
    summary
}

/// Pairwise same-day scan over timed events. Quadratic per day, which is
/// fine at single-digit event counts per day.
pub fn detect_conflicts(events: &[Event]) -> Vec<ConflictPair> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in events {
        if event.time_window().is_some() {
            by_day.entry(event.date).or_default().push(event);
        }
    }

    let mut conflicts = Vec::new();
    for (date, day_events) in &by_day {
        for (i, first) in day_events.iter().enumerate() {
            for second in &day_events[i + 1..] {
                let (Some(w1), Some(w2)) = (first.time_window(), second.time_window()) else {
                    continue;
                };
                if windows_overlap(w1, w2) {
                    conflicts.push(ConflictPair {
                        date: *date,
                        first_id: first.id.clone(),
                        second_id: second.id.clone(),
                    });
                }
            }
        }
    }
    conflicts
}

fn recommendations(
    summary: &ItinerarySummary,
    events: &[Event],
    today: NaiveDate,
) -> Vec<String> {
    let mut messages = Vec::new();

    if !summary.conflicts.is_empty() {
        messages.push(format!(
            "{} schedule conflict(s) detected; review overlapping times",
            summary.conflicts.len()
        ));
    }

    let week_end = today + Duration::days(7);
    let reminders_due = events
        .iter()
        .filter(|event| {
            event
                .reminder
                .as_ref()
                .is_some_and(|reminder| reminder.enabled)
                && event.date >= today
                && event.date < week_end
        })
        .count();
    if reminders_due > 0 {
        messages.push(format!("{} reminder(s) due this week", reminders_due));
    }

    if summary.budget_actual > summary.budget_estimated && summary.budget_estimated > 0.0 {
        messages.push(format!(
            "Actual spend {:.2} has passed the {:.2} estimate",
            summary.budget_actual, summary.budget_estimated
        ));
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: (u32, u32), end: (u32, u32)) -> (NaiveTime, NaiveTime) {
        (
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
    }

    #[test]
    fn test_overlapping_windows_flagged() {
        assert!(windows_overlap(window((9, 0), (10, 0)), window((9, 30), (10, 30))));
    }

    #[test]
    fn test_touching_windows_do_not_overlap() {
        assert!(!windows_overlap(window((9, 0), (10, 0)), window((10, 0), (11, 0))));
        assert!(!windows_overlap(window((10, 0), (11, 0)), window((9, 0), (10, 0))));
    }
}
