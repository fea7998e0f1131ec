//! Query state: the filter and sort selection driving one pipeline run.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::error::InputError;
use super::normalize::{normalize_search_input, NormalizerConfig};
use super::traits::{NoSavedItems, SavedItems};
use crate::serde::{deserialize_optional_string, deserialize_search_term, deserialize_tag_set};

/// Which slice of events a list tab shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Upcoming and live events.
    #[default]
    Upcoming,
    /// Past and cancelled events.
    Past,
    /// Events in the saved-items store, whatever their status.
    Saved,
}

/// Window of days an event must start in, relative to "now".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRangeMode {
    #[default]
    All,
    Today,
    Week,
    Month,
    Year,
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending by start.
    #[default]
    Date,
    /// Ascending by title, case-insensitive.
    Title,
    /// Descending by registered count.
    Popularity,
    /// Descending by total capacity; no ceiling counts as zero.
    Capacity,
}

/// How the selected category is compared with an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMatch {
    /// The classifier label must equal the selection exactly.
    #[default]
    Classified,
    /// The selection must appear, ignoring case, in the title or description.
    Keyword,
}

/// How results are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    Timeline,
}

/// One filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Tab,
    Text,
    Category,
    Location,
    Tags,
    DateRange,
}

/// Facets a screen exposes. Disabled facets are ignored whatever the query holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSet {
    pub tab: bool,
    pub text: bool,
    /// `None` disables the category facet.
    pub category: Option<CategoryMatch>,
    pub location: bool,
    pub tags: bool,
    pub date_range: bool,
}

impl FacetSet {
    /// Every facet enabled, with classified category matching.
    pub fn all() -> Self {
        Self {
            tab: true,
            text: true,
            category: Some(CategoryMatch::Classified),
            location: true,
            tags: true,
            date_range: true,
        }
    }

    pub fn none() -> Self {
        Self {
            tab: false,
            text: false,
            category: None,
            location: false,
            tags: false,
            date_range: false,
        }
    }

    /// The events page: tabs, search, classified categories, location, tags and dates.
    pub fn events_page() -> Self {
        Self::all()
    }

    /// The discovery page: no tabs or tag chips, keyword categories.
    pub fn discovery() -> Self {
        Self {
            tab: false,
            text: true,
            category: Some(CategoryMatch::Keyword),
            location: true,
            tags: false,
            date_range: true,
        }
    }

    pub fn with_category_match(mut self, mode: CategoryMatch) -> Self {
        self.category = Some(mode);
        self
    }
}

impl Default for FacetSet {
    fn default() -> Self {
        Self::all()
    }
}

/// The complete filter and sort selection at one point in time.
///
/// A plain value: running the same state over the same records always
/// yields the same result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Normalized search term. Set through [`QueryState::set_search`].
    #[serde(default, deserialize_with = "deserialize_search_term")]
    search: String,
    #[serde(default)]
    pub tab: Tab,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tag_set")]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub date_range: DateRangeMode,
    #[serde(default)]
    pub sort: SortKey,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the normalized search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Normalizes `raw` and adopts it as the search term.
    ///
    /// On error the previous term is kept.
    pub fn set_search(&mut self, raw: &str, config: &NormalizerConfig) -> Result<(), InputError> {
        self.search = normalize_search_input(raw, config)?;
        Ok(())
    }

    /// Re-checks the held search term against `config`.
    ///
    /// Deserialized states are normalized with the default limits only; call
    /// this when a different maximum length is configured. A rejected term is
    /// left in place, like a rejected [`QueryState::set_search`].
    pub fn apply_search_limits(&mut self, config: &NormalizerConfig) -> Result<(), InputError> {
        let search = std::mem::take(&mut self.search);
        let result = normalize_search_input(&search, config);
        self.search = match &result {
            Ok(normalized) => normalized.clone(),
            Err(_) => search,
        };
        result.map(|_| ())
    }

    /// Builder form of [`QueryState::set_search`] using default limits.
    pub fn with_search(mut self, raw: &str) -> Result<Self, InputError> {
        self.set_search(raw, &NormalizerConfig::default())?;
        Ok(self)
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tab = tab;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date_range(mut self, date_range: DateRangeMode) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Lists the facets that restrict results under `facets`.
    ///
    /// A facet counts when the screen enables it and the state holds a
    /// selection for it. The tab always holds a selection.
    pub fn active_filters(&self, facets: &FacetSet) -> Vec<FilterKind> {
        let mut active = Vec::new();
        if facets.tab {
            active.push(FilterKind::Tab);
        }
        if facets.text && !self.search.is_empty() {
            active.push(FilterKind::Text);
        }
        if facets.category.is_some() && self.category.is_some() {
            active.push(FilterKind::Category);
        }
        if facets.location && self.location.is_some() {
            active.push(FilterKind::Location);
        }
        if facets.tags && !self.tags.is_empty() {
            active.push(FilterKind::Tags);
        }
        if facets.date_range && self.date_range != DateRangeMode::All {
            active.push(FilterKind::DateRange);
        }
        active
    }
}

/// Everything a pipeline run needs besides the records and the query state.
#[derive(Clone, Copy)]
pub struct QueryContext<'s> {
    /// The clock value "today" and date windows are computed from.
    pub now: NaiveDateTime,
    pub saved: &'s dyn SavedItems,
    pub facets: FacetSet,
    pub view: ViewMode,
}

impl<'s> QueryContext<'s> {
    /// Creates a context with every facet enabled, grid view and nothing saved.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            saved: &NoSavedItems,
            facets: FacetSet::all(),
            view: ViewMode::Grid,
        }
    }

    pub fn with_saved(mut self, saved: &'s dyn SavedItems) -> Self {
        self.saved = saved;
        self
    }

    pub fn with_facets(mut self, facets: FacetSet) -> Self {
        self.facets = facets;
        self
    }

    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }
}

impl std::fmt::Debug for QueryContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryContext")
            .field("now", &self.now)
            .field("facets", &self.facets)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}
