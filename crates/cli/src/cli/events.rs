//! Events CLI command.

use clap::{Parser, ValueEnum};
use uuid::Uuid;

use eventdash_core::query::{CategoryMatch, DateRangeMode, FacetSet, SortKey, Tab, ViewMode};

/// Filter, sort and list events.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    /// Free-text search over title, description, organizer and location.
    #[arg(long, short)]
    pub search: Option<String>,
    /// List tab.
    #[arg(long, value_enum, default_value = "upcoming")]
    pub tab: TabArg,
    /// Category to filter by.
    #[arg(long)]
    pub category: Option<String>,
    /// How the category is matched. Defaults to the screen's mode.
    #[arg(long, value_enum)]
    pub category_mode: Option<CategoryModeArg>,
    /// Exact location to filter by.
    #[arg(long)]
    pub location: Option<String>,
    /// Tag to filter by (repeatable; any match passes).
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Date range relative to now.
    #[arg(long, value_enum, default_value = "all")]
    pub range: RangeArg,
    /// Sort key.
    #[arg(long, value_enum, default_value = "date")]
    pub sort: SortArg,
    /// Result layout.
    #[arg(long, value_enum, default_value = "list")]
    pub view: ViewArg,
    /// Which screen's facets to apply.
    #[arg(long, value_enum, default_value = "events")]
    pub screen: ScreenArg,
    /// Saved event ID (repeatable).
    #[arg(long = "saved")]
    pub saved: Vec<Uuid>,
    /// Include price, capacity and attendee summaries.
    #[arg(long)]
    pub summary: bool,
}

impl EventsCommand {
    /// Facets for the selected screen, with the category mode override applied.
    pub fn facets(&self) -> FacetSet {
        let facets = self.screen.facets();
        match self.category_mode {
            Some(mode) => facets.with_category_match(mode.into()),
            None => facets,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Upcoming,
    Past,
    Saved,
}

impl From<TabArg> for Tab {
    fn from(t: TabArg) -> Self {
        match t {
            TabArg::Upcoming => Tab::Upcoming,
            TabArg::Past => Tab::Past,
            TabArg::Saved => Tab::Saved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryModeArg {
    Classified,
    Keyword,
}

impl From<CategoryModeArg> for CategoryMatch {
    fn from(m: CategoryModeArg) -> Self {
        match m {
            CategoryModeArg::Classified => CategoryMatch::Classified,
            CategoryModeArg::Keyword => CategoryMatch::Keyword,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RangeArg {
    All,
    Today,
    Week,
    Month,
    Year,
}

impl From<RangeArg> for DateRangeMode {
    fn from(r: RangeArg) -> Self {
        match r {
            RangeArg::All => DateRangeMode::All,
            RangeArg::Today => DateRangeMode::Today,
            RangeArg::Week => DateRangeMode::Week,
            RangeArg::Month => DateRangeMode::Month,
            RangeArg::Year => DateRangeMode::Year,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Date,
    Title,
    Popularity,
    Capacity,
}

impl From<SortArg> for SortKey {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Date => SortKey::Date,
            SortArg::Title => SortKey::Title,
            SortArg::Popularity => SortKey::Popularity,
            SortArg::Capacity => SortKey::Capacity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Grid,
    List,
    Timeline,
}

impl From<ViewArg> for ViewMode {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Grid => ViewMode::Grid,
            ViewArg::List => ViewMode::List,
            ViewArg::Timeline => ViewMode::Timeline,
        }
    }
}

/// Dashboard screens and the facets each exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScreenArg {
    /// Events page: every facet, classified categories.
    Events,
    /// Discovery page: no tabs or tags, keyword categories.
    Discovery,
}

impl ScreenArg {
    pub fn facets(&self) -> FacetSet {
        match self {
            ScreenArg::Events => FacetSet::events_page(),
            ScreenArg::Discovery => FacetSet::discovery(),
        }
    }
}
