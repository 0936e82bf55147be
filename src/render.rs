use chrono::NaiveDate;
use itinerary::{CalendarView, ItinerarySummary};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use trip::{format_time_of_day, Event};

/// Plain-text rendering of a calendar view for the demo shell.
///
/// Placeholder slots print as blank rows so the month grid's weekday
/// alignment stays visible even in text output.
pub fn render_view(
    view: CalendarView,
    axis: &[Option<NaiveDate>],
    buckets: &BTreeMap<NaiveDate, Vec<Event>>,
) -> String {
    let mut out = format!("== {} view ==\n", view);
    for slot in axis {
        let Some(date) = slot else {
            out.push_str("          .\n");
            continue;
        };
        let events = buckets.get(date).map(Vec::as_slice).unwrap_or_default();
        let _ = writeln!(out, "{} ({})", date.format("%a %Y-%m-%d"), events.len());
        for event in events {
            let _ = writeln!(out, "  {}  {}", format_event_time(event), event_line(event));
        }
    }
    out
}

pub fn render_summary(summary: &ItinerarySummary) -> String {
    let mut out = String::from("== Summary ==\n");
    for (event_type, count) in &summary.counts_by_type {
        let _ = writeln!(out, "{:>4}  {}", count, event_type.as_str());
    }
    let _ = writeln!(
        out,
        "Budget: {:.2} estimated / {:.2} actual",
        summary.budget_estimated, summary.budget_actual
    );
    for conflict in &summary.conflicts {
        let _ = writeln!(
            out,
            "Conflict on {}: {} vs {}",
            conflict.date, conflict.first_id, conflict.second_id
        );
    }
    for message in &summary.recommendations {
        let _ = writeln!(out, "Tip: {}", message);
    }
    out
}

fn format_event_time(event: &Event) -> String {
    match (event.start_time, event.end_time) {
        (Some(start), Some(end)) => {
            format!("{}-{}", format_time_of_day(start), format_time_of_day(end))
        }
        (Some(start), None) => format!("{}      ", format_time_of_day(start)),
        _ => "all day    ".to_string(),
    }
}

fn event_line(event: &Event) -> String {
    format!(
        "{} [{}/{}]",
        event.title,
        event.event_type.as_str(),
        event.status.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinerary::{bin_events, date_axis};
    use trip::EventType;

    #[test]
    fn test_month_placeholders_render_as_blank_rows() {
        // October 2025 starts on a Wednesday.
        let reference = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let axis = date_axis(CalendarView::Month, reference, None);
        let buckets = bin_events(&axis, &[]);
        let rendered = render_view(CalendarView::Month, &axis, &buckets);

        let blank_rows = rendered
            .lines()
            .filter(|line| line.trim() == ".")
            .count();
        assert_eq!(blank_rows, 3);
    }

    #[test]
    fn test_events_render_under_their_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let axis = vec![Some(date)];
        let event = Event::new("e1", "Space Mountain", date, EventType::Park);
        let buckets = bin_events(&axis, &[event]);
        let rendered = render_view(CalendarView::Week, &axis, &buckets);
        assert!(rendered.contains("Space Mountain"));
        assert!(rendered.contains("[park/planned]"));
    }
}
