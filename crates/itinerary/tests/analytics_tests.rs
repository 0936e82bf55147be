use chrono::{NaiveDate, NaiveTime};
use itinerary::summarize;
use trip::{Budget, Event, EventType, Reminder, ReminderChannel};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

fn timed(id: &str, day: u32, start: (u32, u32), end: (u32, u32), event_type: EventType) -> Event {
    let mut event = Event::new(id, format!("Event {}", id), date(day), event_type);
    event.start_time = NaiveTime::from_hms_opt(start.0, start.1, 0);
    event.end_time = NaiveTime::from_hms_opt(end.0, end.1, 0);
    event
}

#[test]
fn test_counts_by_type() {
    let events = vec![
        Event::new("e1", "Ride", date(2), EventType::Park),
        Event::new("e2", "Lunch", date(2), EventType::Dining),
        Event::new("e3", "Dinner", date(3), EventType::Dining),
    ];
    let summary = summarize(&events, date(1));
    assert_eq!(summary.counts_by_type[&EventType::Dining], 2);
    assert_eq!(summary.counts_by_type[&EventType::Park], 1);
    assert!(!summary.counts_by_type.contains_key(&EventType::Travel));
}

#[test]
fn test_budget_sums_treat_missing_actual_as_zero() {
    let mut with_actual = Event::new("e1", "Dinner", date(2), EventType::Dining);
    with_actual.budget = Some(Budget {
        estimated: 120.0,
        actual: Some(140.5),
        currency: "USD".to_string(),
        category: Some("food".to_string()),
    });
    let mut estimate_only = Event::new("e2", "Souvenirs", date(3), EventType::Shopping);
    estimate_only.budget = Some(Budget {
        estimated: 60.0,
        actual: None,
        currency: "USD".to_string(),
        category: None,
    });
    let no_budget = Event::new("e3", "Pool", date(4), EventType::Rest);

    let summary = summarize(&[with_actual, estimate_only, no_budget], date(1));
    assert!((summary.budget_estimated - 180.0).abs() < f64::EPSILON);
    assert!((summary.budget_actual - 140.5).abs() < f64::EPSILON);
}

#[test]
fn test_overlapping_same_day_events_conflict() {
    let events = vec![
        timed("e1", 2, (9, 0), (10, 0), EventType::Park),
        timed("e2", 2, (9, 30), (10, 30), EventType::Dining),
    ];
    let summary = summarize(&events, date(1));
    assert_eq!(summary.conflicts.len(), 1);
    assert_eq!(summary.conflicts[0].first_id, "e1");
    assert_eq!(summary.conflicts[0].second_id, "e2");
}

#[test]
fn test_touching_intervals_do_not_conflict() {
    let events = vec![
        timed("e1", 2, (9, 0), (10, 0), EventType::Park),
        timed("e2", 2, (10, 0), (11, 0), EventType::Dining),
    ];
    let summary = summarize(&events, date(1));
    assert!(summary.conflicts.is_empty());
}

#[test]
fn test_same_window_different_days_do_not_conflict() {
    let events = vec![
        timed("e1", 2, (9, 0), (10, 0), EventType::Park),
        timed("e2", 3, (9, 0), (10, 0), EventType::Dining),
    ];
    let summary = summarize(&events, date(1));
    assert!(summary.conflicts.is_empty());
}

#[test]
fn test_recommendations_mention_conflicts_and_due_reminders() {
    let mut reminded = Event::new("e3", "Fireworks", date(4), EventType::Special);
    reminded.reminder = Some(Reminder {
        enabled: true,
        lead_minutes: 60,
        channel: ReminderChannel::Push,
    });
    let events = vec![
        timed("e1", 2, (9, 0), (10, 0), EventType::Park),
        timed("e2", 2, (9, 30), (10, 30), EventType::Dining),
        reminded,
    ];

    let summary = summarize(&events, date(1));
    assert!(summary
        .recommendations
        .iter()
        .any(|message| message.contains("1 schedule conflict")));
    assert!(summary
        .recommendations
        .iter()
        .any(|message| message.contains("1 reminder(s) due this week")));
}

#[test]
fn test_no_recommendations_for_a_clean_week() {
    let events = vec![
        timed("e1", 2, (9, 0), (10, 0), EventType::Park),
        timed("e2", 3, (12, 0), (13, 0), EventType::Dining),
    ];
    let summary = summarize(&events, date(1));
    assert!(summary.recommendations.is_empty());
}

#[test]
fn test_disabled_or_distant_reminders_are_not_due() {
    let mut disabled = Event::new("e1", "Brunch", date(2), EventType::Dining);
    disabled.reminder = Some(Reminder {
        enabled: false,
        lead_minutes: 30,
        channel: ReminderChannel::Email,
    });
    let mut far_out = Event::new("e2", "Brunch", date(20), EventType::Dining);
    far_out.reminder = Some(Reminder {
        enabled: true,
        lead_minutes: 30,
        channel: ReminderChannel::Email,
    });

    let summary = summarize(&[disabled, far_out], date(1));
    assert!(summary.recommendations.is_empty());
}
