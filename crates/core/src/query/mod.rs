//! Faceted event query engine.
//!
//! Normalize → classify → filter → sort → (timeline) bucket → summarize.
//! Every stage is a pure function of its input, the query state and an
//! injected clock value.

mod classify;
mod error;
mod facets;
mod normalize;
mod operations;
mod pipeline;
mod sorting;
mod state;
mod summary;
mod timeline;
mod traits;

pub use classify::{
    classify, classify_event, classify_events, classify_with, CategoryRule, ClassifiedEvent,
    EventCategory, CATEGORY_RULES, DEFAULT_CATEGORY,
};
pub use error::InputError;
pub use facets::FacetOptions;
pub use normalize::{
    normalize_search_input, sanitize, NormalizerConfig, DEFAULT_MAX_SEARCH_LEN, STRIPPED_CHARS,
};
pub use operations::{
    date_window, event_matches, filter_calendars, filter_events, matches_category,
    matches_date_range, matches_location, matches_tab, matches_tags, matches_text,
};
pub use pipeline::{query_calendars, run_classified, run_query, QueryOutcome, ResultView};
pub use sorting::{
    compare_events, compare_titles, sort_calendars, sort_events, CalendarSortKey,
};
pub use state::{
    CategoryMatch, DateRangeMode, FacetSet, FilterKind, QueryContext, QueryState, SortKey, Tab,
    ViewMode,
};
pub use summary::{
    attendee_overflow, capacity_fill_percent, price_display, summarize_events, EventSummary,
    PriceDisplay, ATTENDEE_PREVIEW_LIMIT,
};
pub use timeline::{bucket_by_day, bucket_label, TimelineBucket};
pub use traits::{NoSavedItems, SavedItems, Searchable};
