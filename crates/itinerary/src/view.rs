use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use trip::{Event, Vacation};

/// Rendering mode for the vacation calendar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CalendarView {
    Month,
    Week,
    Schedule,
    Timeline,
}

impl CalendarView {
    /// Schedule and timeline views always show the full vacation span, so
    /// previous/next navigation has nothing to move.
    pub fn supports_navigation(&self) -> bool {
        matches!(self, CalendarView::Month | CalendarView::Week)
    }
}

/// Compute the date axis to render for a view.
///
/// Entries are `Some(date)` for real days. Month view prepends `None`
/// placeholder slots so day 1 lands in its weekday column of a
/// Sunday-first 7-column grid; other views have no placeholders.
pub fn date_axis(
    view: CalendarView,
    reference: NaiveDate,
    vacation: Option<&Vacation>,
) -> Vec<Option<NaiveDate>> {
    match view {
        CalendarView::Month => month_axis(reference),
        CalendarView::Week => week_axis(reference),
        CalendarView::Schedule | CalendarView::Timeline => vacation
            .map(|v| v.days().into_iter().map(Some).collect())
            .unwrap_or_default(),
    }
}

fn month_axis(reference: NaiveDate) -> Vec<Option<NaiveDate>> {
    let Some(first) = reference.with_day(1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut axis: Vec<Option<NaiveDate>> = vec![None; leading];

    let mut current = first;
    while current.month() == first.month() {
        axis.push(Some(current));
        current += Duration::days(1);
    }
    axis
}

fn week_axis(reference: NaiveDate) -> Vec<Option<NaiveDate>> {
    let sunday = reference - Duration::days(reference.weekday().num_days_from_sunday() as i64);
    (0..7).map(|i| Some(sunday + Duration::days(i))).collect()
}

/// Move the reference date one step for the view; a no-op where navigation
/// is unsupported.
pub fn shift_reference(view: CalendarView, reference: NaiveDate, forward: bool) -> NaiveDate {
    match view {
        CalendarView::Month => {
            let shifted = if forward {
                reference.checked_add_months(Months::new(1))
            } else {
                reference.checked_sub_months(Months::new(1))
            };
            shifted.unwrap_or(reference)
        }
        CalendarView::Week => {
            if forward {
                reference + Duration::weeks(1)
            } else {
                reference - Duration::weeks(1)
            }
        }
        CalendarView::Schedule | CalendarView::Timeline => reference,
    }
}

/// Within-day display order: timed events by start ascending, untimed
/// events after all timed ones, ties broken by event-type rank so park
/// days surface first when the caller truncates the list.
pub fn display_order(a: &Event, b: &Event) -> Ordering {
    match (a.start_time, b.start_time) {
        (Some(x), Some(y)) => x
            .cmp(&y)
            .then_with(|| a.event_type.display_rank().cmp(&b.event_type.display_rank())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.event_type.display_rank().cmp(&b.event_type.display_rank()),
    }
}

/// Group events by calendar day over the visible axis.
///
/// Every real axis day gets an entry, empty when nothing falls on it, so
/// renderers can tell "no events" apart from "day not in range". Events
/// dated outside the axis are omitted. Buckets are display-sorted; the
/// full list is returned and any "+N more" truncation is the caller's.
pub fn bin_events(
    axis: &[Option<NaiveDate>],
    events: &[Event],
) -> BTreeMap<NaiveDate, Vec<Event>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Event>> = axis
        .iter()
        .flatten()
        .map(|date| (*date, Vec::new()))
        .collect();

    for event in events {
        if let Some(bucket) = buckets.get_mut(&event.date) {
            bucket.push(event.clone());
        }
    }

    for bucket in buckets.values_mut() {
        bucket.sort_by(display_order);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use trip::EventType;

    #[test]
    fn test_week_axis_runs_sunday_to_saturday() {
        // 2024-03-06 is a Wednesday.
        let reference = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let axis = week_axis(reference);
        assert_eq!(axis.len(), 7);
        assert_eq!(axis[0], NaiveDate::from_ymd_opt(2024, 3, 3));
        assert_eq!(axis[6], NaiveDate::from_ymd_opt(2024, 3, 9));
    }

    #[test]
    fn test_month_axis_february_leap_year() {
        // 2024-02-01 is a Thursday: four placeholders, 29 days.
        let reference = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let axis = month_axis(reference);
        assert_eq!(axis.iter().filter(|slot| slot.is_none()).count(), 4);
        assert_eq!(axis.iter().filter(|slot| slot.is_some()).count(), 29);
    }

    #[test]
    fn test_shift_reference_is_noop_for_schedule() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        assert_eq!(
            shift_reference(CalendarView::Schedule, reference, true),
            reference
        );
        assert_eq!(
            shift_reference(CalendarView::Timeline, reference, false),
            reference
        );
        assert!(!CalendarView::Schedule.supports_navigation());
    }

    #[test]
    fn test_untimed_events_sort_after_timed() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let mut timed = Event::new("a", "Breakfast", date, EventType::Dining);
        timed.start_time = NaiveTime::from_hms_opt(8, 0, 0);
        let untimed = Event::new("b", "Pick up pins", date, EventType::Shopping);

        assert_eq!(display_order(&timed, &untimed), Ordering::Less);
        assert_eq!(display_order(&untimed, &timed), Ordering::Greater);
    }
}
