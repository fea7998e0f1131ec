//! The query pipeline: classify, filter, sort and optionally bucket.

use serde::Serialize;

use super::classify::{classify_events, ClassifiedEvent};
use super::operations::{filter_calendars, filter_events};
use super::sorting::{sort_calendars, sort_events, CalendarSortKey};
use super::state::{FilterKind, QueryContext, QueryState, ViewMode};
use super::timeline::{bucket_by_day, TimelineBucket};
use crate::calendar::{CalendarRecord, CalendarStatus, EventRecord};

/// Results shaped for the active view mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "results", rename_all = "snake_case")]
pub enum ResultView<'a> {
    /// Grid and list views render the sorted sequence directly.
    Flat(Vec<&'a EventRecord>),
    Timeline(Vec<TimelineBucket<'a>>),
}

impl<'a> ResultView<'a> {
    /// Number of events across the view.
    pub fn len(&self) -> usize {
        match self {
            ResultView::Flat(events) => events.len(),
            ResultView::Timeline(buckets) => buckets.iter().map(TimelineBucket::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Events in display order, flattening timeline buckets.
    pub fn events(&self) -> Vec<&'a EventRecord> {
        match self {
            ResultView::Flat(events) => events.clone(),
            ResultView::Timeline(buckets) => buckets
                .iter()
                .flat_map(|bucket| bucket.events.iter().copied())
                .collect(),
        }
    }
}

/// The output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome<'a> {
    pub view: ResultView<'a>,
    /// Records the query ran over.
    pub total: usize,
    /// Records that passed every filter.
    pub matched: usize,
    pub active_filters: Vec<FilterKind>,
}

impl QueryOutcome<'_> {
    /// True when at least one facet restricted the results.
    pub fn filters_active(&self) -> bool {
        !self.active_filters.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}

/// Runs the pipeline over events that were classified ahead of time.
pub fn run_classified<'a>(
    items: &[ClassifiedEvent<'a>],
    state: &QueryState,
    ctx: &QueryContext<'_>,
) -> QueryOutcome<'a> {
    let mut events = filter_events(items, state, ctx);
    sort_events(&mut events, state.sort);

    let matched = events.len();
    let active_filters = state.active_filters(&ctx.facets);

    tracing::debug!(
        total = items.len(),
        matched,
        filters_active = !active_filters.is_empty(),
        view = ?ctx.view,
        sort = ?state.sort,
        "event query evaluated"
    );

    let view = match ctx.view {
        ViewMode::Timeline => ResultView::Timeline(bucket_by_day(&events, ctx.now.date())),
        ViewMode::Grid | ViewMode::List => ResultView::Flat(events),
    };

    QueryOutcome {
        view,
        total: items.len(),
        matched,
        active_filters,
    }
}

/// Classifies `records` and runs the pipeline over them.
pub fn run_query<'a>(
    records: &'a [EventRecord],
    state: &QueryState,
    ctx: &QueryContext<'_>,
) -> QueryOutcome<'a> {
    run_classified(&classify_events(records), state, ctx)
}

/// Filters and sorts calendars for the management screen.
pub fn query_calendars<'a>(
    calendars: &'a [CalendarRecord],
    term: &str,
    status: Option<CalendarStatus>,
    sort: CalendarSortKey,
) -> Vec<&'a CalendarRecord> {
    let mut filtered = filter_calendars(calendars, term, status);
    sort_calendars(&mut filtered, sort);

    tracing::debug!(
        total = calendars.len(),
        matched = filtered.len(),
        ?sort,
        "calendar query evaluated"
    );

    filtered
}
