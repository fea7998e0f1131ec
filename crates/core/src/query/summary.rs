//! Scalar summaries shown on list items.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::classify::{classify_event, ClassifiedEvent, EventCategory};
use crate::calendar::EventRecord;

/// Number of attendee avatars a list item shows before "+N more".
pub const ATTENDEE_PREVIEW_LIMIT: usize = 5;

/// Price badge for an event's ticket types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "min", rename_all = "snake_case")]
pub enum PriceDisplay {
    /// Every ticket type is zero-priced (or there are none).
    Free,
    /// Every ticket type is paid; carries the cheapest price.
    Paid(f64),
    /// Both free and paid ticket types exist.
    Mixed,
}

impl fmt::Display for PriceDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceDisplay::Free => f.write_str("Free"),
            PriceDisplay::Paid(min) => write!(f, "${:.2}", min),
            PriceDisplay::Mixed => f.write_str("Free - Paid"),
        }
    }
}

/// Derives the price badge from an event's ticket types.
pub fn price_display(event: &EventRecord) -> PriceDisplay {
    let free = event.ticket_types.iter().filter(|t| t.is_free()).count();

    if free == event.ticket_types.len() {
        return PriceDisplay::Free;
    }
    if free > 0 {
        return PriceDisplay::Mixed;
    }

    let min = event
        .ticket_types
        .iter()
        .map(|t| t.price)
        .fold(f64::INFINITY, f64::min);
    PriceDisplay::Paid(min)
}

/// Percentage of capacity taken. None when the event has no ceiling.
pub fn capacity_fill_percent(event: &EventRecord) -> Option<f64> {
    match event.total_capacity {
        Some(capacity) if capacity > 0 => {
            Some(f64::from(event.registered_count) / f64::from(capacity) * 100.0)
        }
        _ => None,
    }
}

/// Count for the "+N more" badge next to attendee avatars.
///
/// May be negative when fewer people are registered than are known by name;
/// callers clamp before display.
pub fn attendee_overflow(event: &EventRecord) -> i64 {
    let shown = event.attendees.len().min(ATTENDEE_PREVIEW_LIMIT);
    i64::from(event.registered_count) - shown as i64
}

/// Everything a list item shows besides the record itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    pub id: Uuid,
    pub category: EventCategory,
    pub price: PriceDisplay,
    pub capacity_fill: Option<f64>,
    pub attendee_overflow: i64,
}

impl EventSummary {
    pub fn new(event: &EventRecord, category: EventCategory) -> Self {
        Self {
            id: event.id,
            category,
            price: price_display(event),
            capacity_fill: capacity_fill_percent(event),
            attendee_overflow: attendee_overflow(event),
        }
    }
}

/// Summarizes each event using the categories computed for `classified`.
///
/// Events missing from `classified` are classified on the spot.
pub fn summarize_events(
    events: &[&EventRecord],
    classified: &[ClassifiedEvent<'_>],
) -> Vec<EventSummary> {
    let categories: HashMap<Uuid, EventCategory> = classified
        .iter()
        .map(|item| (item.event.id, item.category))
        .collect();

    events
        .iter()
        .map(|event| {
            let category = categories
                .get(&event.id)
                .copied()
                .unwrap_or_else(|| classify_event(event));
            EventSummary::new(event, category)
        })
        .collect()
}
