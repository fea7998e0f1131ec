use std::collections::BTreeSet;

use chrono::{Days, Months, NaiveDate, NaiveDateTime};

use super::classify::{ClassifiedEvent, EventCategory};
use super::state::{CategoryMatch, DateRangeMode, QueryContext, QueryState, Tab};
use super::traits::{SavedItems, Searchable};
use crate::calendar::{CalendarRecord, CalendarStatus, EventRecord};

/// Returns true if the event belongs under `tab`.
/// The saved tab ignores status and only consults `saved`.
pub fn matches_tab(event: &EventRecord, tab: Tab, saved: &dyn SavedItems) -> bool {
    match tab {
        Tab::Upcoming => event.status.is_open(),
        Tab::Past => !event.status.is_open(),
        Tab::Saved => saved.is_saved(event.id),
    }
}

/// Case-insensitive substring match of `term` against every searchable field.
/// An empty term matches everything.
pub fn matches_text<T: Searchable + ?Sized>(record: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Compares the selected category with an event using `mode`.
pub fn matches_category(
    event: &EventRecord,
    category: EventCategory,
    selected: &str,
    mode: CategoryMatch,
) -> bool {
    match mode {
        CategoryMatch::Classified => category.label() == selected,
        CategoryMatch::Keyword => {
            let needle = selected.to_lowercase();
            event.title.to_lowercase().contains(&needle)
                || event.description.to_lowercase().contains(&needle)
        }
    }
}

/// Exact match on the raw location string. Events without a location never match.
pub fn matches_location(event: &EventRecord, selected: &str) -> bool {
    event.location.as_deref() == Some(selected)
}

/// Passes when the event shares at least one tag with `selected`.
/// An empty selection passes everything; an untagged event fails any selection.
pub fn matches_tags(event: &EventRecord, selected: &BTreeSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    event
        .tags
        .as_ref()
        .is_some_and(|tags| tags.iter().any(|tag| selected.contains(tag)))
}

/// Returns the inclusive day window for `mode`, or None for [`DateRangeMode::All`].
pub fn date_window(mode: DateRangeMode, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let end = match mode {
        DateRangeMode::All => return None,
        DateRangeMode::Today => today,
        DateRangeMode::Week => today
            .checked_add_days(Days::new(7))
            .unwrap_or(NaiveDate::MAX),
        DateRangeMode::Month => today
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX),
        DateRangeMode::Year => today
            .checked_add_months(Months::new(12))
            .unwrap_or(NaiveDate::MAX),
    };
    Some((today, end))
}

/// Tests the event's start day against the window for `mode`.
/// Both ends are compared at day granularity and are inclusive.
pub fn matches_date_range(event: &EventRecord, mode: DateRangeMode, now: NaiveDateTime) -> bool {
    date_window(mode, now.date())
        .is_none_or(|(start, end)| (start..=end).contains(&event.date()))
}

/// Returns true if the event satisfies every facet enabled in `ctx`.
pub fn event_matches(item: &ClassifiedEvent<'_>, state: &QueryState, ctx: &QueryContext<'_>) -> bool {
    let facets = &ctx.facets;
    let event = item.event;

    (!facets.tab || matches_tab(event, state.tab, ctx.saved))
        && (!facets.text || matches_text(event, state.search()))
        && facets.category.is_none_or(|mode| {
            state
                .category
                .as_deref()
                .is_none_or(|selected| matches_category(event, item.category, selected, mode))
        })
        && (!facets.location
            || state
                .location
                .as_deref()
                .is_none_or(|selected| matches_location(event, selected)))
        && (!facets.tags || matches_tags(event, &state.tags))
        && (!facets.date_range || matches_date_range(event, state.date_range, ctx.now))
}

/// Filters classified events by every enabled facet, keeping input order.
pub fn filter_events<'a>(
    items: &[ClassifiedEvent<'a>],
    state: &QueryState,
    ctx: &QueryContext<'_>,
) -> Vec<&'a EventRecord> {
    items
        .iter()
        .filter(|item| event_matches(item, state, ctx))
        .map(|item| item.event)
        .collect()
}

/// Filters calendars for the management screen by search term and status.
pub fn filter_calendars<'a>(
    calendars: &'a [CalendarRecord],
    term: &str,
    status: Option<CalendarStatus>,
) -> Vec<&'a CalendarRecord> {
    calendars
        .iter()
        .filter(|calendar| {
            matches_text(*calendar, term) && status.is_none_or(|s| calendar.status == s)
        })
        .collect()
}
