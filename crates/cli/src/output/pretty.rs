//! Pretty output formatting.

use std::collections::HashMap;

use eventdash_core::calendar::{CalendarRecord, EventRecord};
use eventdash_core::query::{EventSummary, FacetOptions, QueryOutcome, ResultView};
use uuid::Uuid;

/// Format an event for display, with its summary when given.
pub fn format_event(event: &EventRecord, summary: Option<&EventSummary>) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  When: {}\n  Organizer: {}",
        event.title,
        event.status.as_str(),
        event.id,
        event.start.format("%Y-%m-%d %H:%M"),
        event.organizer.name
    );
    if let Some(location) = &event.location {
        output.push_str(&format!("\n  Location: {}", location));
    }
    if let Some(tags) = event.tags.as_ref().filter(|tags| !tags.is_empty()) {
        output.push_str(&format!("\n  Tags: {}", tags.join(", ")));
    }
    match event.total_capacity {
        Some(capacity) => output.push_str(&format!(
            "\n  Registered: {} / {}",
            event.registered_count, capacity
        )),
        None => output.push_str(&format!("\n  Registered: {}", event.registered_count)),
    }
    if let Some(summary) = summary {
        output.push_str(&format!(
            "\n  Category: {}\n  Price: {}",
            summary.category, summary.price
        ));
        if let Some(fill) = summary.capacity_fill {
            output.push_str(&format!("\n  Filled: {:.0}%", fill));
        }
        // Display clamps; the summary itself may be negative.
        if summary.attendee_overflow > 0 {
            output.push_str(&format!("\n  Attendees: +{} more", summary.attendee_overflow));
        }
    }
    output
}

/// Format a query outcome for display.
pub fn format_outcome(outcome: &QueryOutcome<'_>, summaries: Option<&[EventSummary]>) -> String {
    if outcome.is_empty() {
        return if outcome.filters_active() {
            "No events match the current filters.".to_string()
        } else {
            "No events found.".to_string()
        };
    }

    let by_id: HashMap<Uuid, &EventSummary> = summaries
        .unwrap_or_default()
        .iter()
        .map(|summary| (summary.id, summary))
        .collect();
    let item = |event: &EventRecord| format_event(event, by_id.get(&event.id).copied());

    let mut output = format!("EVENTS ({} of {})\n", outcome.matched, outcome.total);
    output.push_str(&"-".repeat(40));
    match &outcome.view {
        ResultView::Flat(events) => {
            for &event in events {
                output.push_str(&format!("\n{}", item(event)));
                output.push('\n');
            }
        }
        ResultView::Timeline(buckets) => {
            for bucket in buckets {
                output.push_str(&format!("\n== {} ==", bucket.label));
                for &event in &bucket.events {
                    output.push_str(&format!("\n{}", item(event)));
                    output.push('\n');
                }
            }
        }
    }
    output
}

/// Format facet option lists for display.
pub fn format_facets(options: &FacetOptions) -> String {
    let list = |values: &[String]| {
        if values.is_empty() {
            "(none)".to_string()
        } else {
            values.join(", ")
        }
    };
    let categories: Vec<String> = options.categories.iter().map(|c| c.to_string()).collect();

    format!(
        "Categories: {}\nLocations: {}\nTags: {}",
        list(&categories),
        list(&options.locations),
        list(&options.tags)
    )
}

/// Format a calendar for display.
pub fn format_calendar(calendar: &CalendarRecord) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Subscribers: {}\n  Events: {}",
        calendar.name,
        calendar.status.as_str(),
        calendar.id,
        calendar.subscriber_count,
        calendar.event_count
    );
    if !calendar.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", calendar.description));
    }
    if let Some(last) = calendar.last_event_at {
        output.push_str(&format!("\n  Last event: {}", last.format("%Y-%m-%d")));
    }
    output
}

/// Format calendars for display.
pub fn format_calendars(calendars: &[&CalendarRecord]) -> String {
    if calendars.is_empty() {
        return "No calendars found.".to_string();
    }
    let mut output = format!("CALENDARS ({})\n", calendars.len());
    output.push_str(&"-".repeat(40));
    for calendar in calendars {
        output.push_str(&format!("\n{}", format_calendar(calendar)));
        output.push('\n');
    }
    output
}
