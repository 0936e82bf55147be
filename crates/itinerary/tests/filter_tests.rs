use chrono::NaiveDate;
use itinerary::{filter_events, EventFilter};
use trip::{Event, EventPriority, EventStatus, EventType};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

fn sample_events() -> Vec<Event> {
    let mut ride = Event::new("e1", "Space Mountain", date(2), EventType::Park);
    ride.park_id = Some("magic-kingdom".to_string());
    ride.tags = vec!["thrill".to_string(), "indoor".to_string()];
    ride.participants = vec!["alex".to_string(), "sam".to_string()];
    ride.priority = EventPriority::High;

    let mut dinner = Event::new("e2", "Dinner at Tiffins", date(3), EventType::Dining);
    dinner.location = Some("Animal Kingdom".to_string());
    dinner.notes = Some("Window seat requested".to_string());
    dinner.participants = vec!["sam".to_string()];

    let mut rest = Event::new("e3", "Pool afternoon", date(4), EventType::Rest);
    rest.status = EventStatus::Confirmed;
    rest.tags = vec!["relax".to_string()];

    vec![ride, dinner, rest]
}

#[test]
fn test_empty_filter_matches_everything_in_order() {
    let events = sample_events();
    let filtered = filter_events(&events, &EventFilter::default());
    assert_eq!(filtered, events);
}

#[test]
fn test_criteria_are_anded() {
    let events = sample_events();
    let filter = EventFilter {
        types: vec![EventType::Park, EventType::Dining],
        participants: vec!["sam".to_string()],
        priorities: vec![EventPriority::High],
        ..Default::default()
    };
    let filtered = filter_events(&events, &filter);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "e1");
}

#[test]
fn test_free_text_search_is_case_insensitive_across_fields() {
    let events = sample_events();

    for query in ["TIFFINS", "animal kingdom", "window SEAT"] {
        let filter = EventFilter {
            query: Some(query.to_string()),
            ..Default::default()
        };
        let filtered = filter_events(&events, &filter);
        assert_eq!(filtered.len(), 1, "query '{}' should match the dinner", query);
        assert_eq!(filtered[0].id, "e2");
    }

    // Tags are searchable too.
    let filter = EventFilter {
        query: Some("Thrill".to_string()),
        ..Default::default()
    };
    assert_eq!(filter_events(&events, &filter)[0].id, "e1");
}

#[test]
fn test_date_range_is_inclusive() {
    let events = sample_events();
    let filter = EventFilter {
        date_from: Some(date(3)),
        date_to: Some(date(4)),
        ..Default::default()
    };
    let filtered = filter_events(&events, &filter);
    let ids: Vec<&str> = filtered.iter().map(|event| event.id.as_str()).collect();
    assert_eq!(ids, vec!["e2", "e3"]);
}

#[test]
fn test_tag_criterion_passes_on_any_shared_tag() {
    let events = sample_events();
    let filter = EventFilter {
        tags: vec!["indoor".to_string(), "missing".to_string()],
        ..Default::default()
    };
    let filtered = filter_events(&events, &filter);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "e1");
}

#[test]
fn test_filter_is_idempotent() {
    let events = sample_events();
    let filter = EventFilter {
        participants: vec!["sam".to_string()],
        query: Some("e".to_string()),
        ..Default::default()
    };
    let once = filter_events(&events, &filter);
    let twice = filter_events(&once, &filter);
    assert_eq!(once, twice);
}

#[test]
fn test_park_criterion_requires_park_id() {
    let events = sample_events();
    let filter = EventFilter {
        parks: vec!["magic-kingdom".to_string()],
        ..Default::default()
    };
    let filtered = filter_events(&events, &filter);
    assert_eq!(filtered.len(), 1, "events without a park id must not match");
    assert_eq!(filtered[0].id, "e1");
}
