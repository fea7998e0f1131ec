use thiserror::Error;

/// Errors found when validating records loaded from a dataset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Ticket price must be a finite, non-negative number: {0}")]
    InvalidPrice(String),
    #[error("Calendar name cannot be empty")]
    EmptyName,
    #[error("Calendar name too long (max 100 characters)")]
    NameTooLong,
    #[error("Last event cannot precede calendar creation")]
    InvalidTimeline,
}
