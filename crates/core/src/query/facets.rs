use std::collections::BTreeSet;

use serde::Serialize;

use super::classify::{classify_event, EventCategory};
use crate::calendar::EventRecord;

/// Option lists for the filter controls, computed once per dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    /// Category labels present, in classifier rule order.
    pub categories: Vec<&'static str>,
    /// Distinct non-blank locations, sorted.
    pub locations: Vec<String>,
    /// Distinct tags, sorted.
    pub tags: Vec<String>,
}

impl FacetOptions {
    pub fn from_records(records: &[EventRecord]) -> Self {
        let mut categories: BTreeSet<EventCategory> = BTreeSet::new();
        let mut locations: BTreeSet<&str> = BTreeSet::new();
        let mut tags: BTreeSet<&str> = BTreeSet::new();

        for event in records {
            categories.insert(classify_event(event));
            if let Some(location) = event.location.as_deref().filter(|l| !l.trim().is_empty()) {
                locations.insert(location);
            }
            if let Some(event_tags) = &event.tags {
                tags.extend(event_tags.iter().map(String::as_str));
            }
        }

        Self {
            categories: categories.into_iter().map(|c| c.label()).collect(),
            locations: locations.into_iter().map(str::to_string).collect(),
            tags: tags.into_iter().map(str::to_string).collect(),
        }
    }
}
