//! Calendars CLI command.

use clap::{Parser, ValueEnum};

use eventdash_core::calendar::CalendarStatus;
use eventdash_core::query::CalendarSortKey;

/// Filter and sort calendars.
#[derive(Debug, Parser)]
pub struct CalendarsCommand {
    /// Free-text search over name and description.
    #[arg(long, short)]
    pub search: Option<String>,
    /// Only calendars with this status.
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    /// Sort key.
    #[arg(long, value_enum, default_value = "name")]
    pub sort: CalendarSortArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Active,
    Archived,
    Draft,
}

impl From<StatusArg> for CalendarStatus {
    fn from(s: StatusArg) -> Self {
        match s {
            StatusArg::Active => CalendarStatus::Active,
            StatusArg::Archived => CalendarStatus::Archived,
            StatusArg::Draft => CalendarStatus::Draft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalendarSortArg {
    Name,
    Subscribers,
    Events,
    Recent,
}

impl From<CalendarSortArg> for CalendarSortKey {
    fn from(s: CalendarSortArg) -> Self {
        match s {
            CalendarSortArg::Name => CalendarSortKey::Name,
            CalendarSortArg::Subscribers => CalendarSortKey::Subscribers,
            CalendarSortArg::Events => CalendarSortKey::Events,
            CalendarSortArg::Recent => CalendarSortKey::Recent,
        }
    }
}
