//! JSON output formatting.

use eventdash_core::query::{EventSummary, QueryOutcome};
use serde::Serialize;

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// JSON body of the `events` command.
#[derive(Debug, Serialize)]
pub struct EventsReport<'r, 'a> {
    #[serde(flatten)]
    pub outcome: &'r QueryOutcome<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summaries: Option<Vec<EventSummary>>,
}
