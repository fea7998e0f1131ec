//! Dataset loading.
//!
//! Records come either from a JSON file (`{"events": [...], "calendars": [...]}`)
//! or from the seed generator.

use std::path::Path;

use chrono::NaiveDateTime;
use eventdash_core::calendar::{
    generate_seed_calendars, generate_seed_events, validate_calendar, validate_event,
    CalendarRecord, EventRecord,
};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// The records a command runs over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub calendars: Vec<CalendarRecord>,
}

impl Dataset {
    /// Generates the seed dataset around `now`.
    pub fn seed(now: NaiveDateTime, count: u32) -> Self {
        Self {
            events: generate_seed_events(now, count),
            calendars: generate_seed_calendars(now),
        }
    }

    /// Parses and validates a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Reads a dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CliError::ReadDataset {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&json)?;

        tracing::info!(
            path = %path.display(),
            events = dataset.events.len(),
            calendars = dataset.calendars.len(),
            "Loaded dataset"
        );

        Ok(dataset)
    }

    /// Validates every record, reporting the first failure.
    pub fn validate(&self) -> Result<()> {
        for (index, event) in self.events.iter().enumerate() {
            validate_event(event).map_err(|source| CliError::InvalidRecord {
                kind: "event",
                index,
                source,
            })?;
        }
        for (index, calendar) in self.calendars.iter().enumerate() {
            validate_calendar(calendar).map_err(|source| CliError::InvalidRecord {
                kind: "calendar",
                index,
                source,
            })?;
        }
        Ok(())
    }
}
