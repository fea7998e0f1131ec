use std::collections::{BTreeSet, HashSet};

use uuid::Uuid;

use crate::calendar::{CalendarRecord, EventRecord};

/// Store of identifiers the user has saved, queried by membership.
pub trait SavedItems {
    fn is_saved(&self, id: Uuid) -> bool;
}

impl SavedItems for HashSet<Uuid> {
    fn is_saved(&self, id: Uuid) -> bool {
        self.contains(&id)
    }
}

impl SavedItems for BTreeSet<Uuid> {
    fn is_saved(&self, id: Uuid) -> bool {
        self.contains(&id)
    }
}

impl SavedItems for [Uuid] {
    fn is_saved(&self, id: Uuid) -> bool {
        self.contains(&id)
    }
}

/// A saved-items store with nothing saved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSavedItems;

impl SavedItems for NoSavedItems {
    fn is_saved(&self, _id: Uuid) -> bool {
        false
    }
}

/// Records that take part in free-text search.
pub trait Searchable {
    /// Returns every field the text filter looks at. Absent fields are skipped.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for EventRecord {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.organizer.name.as_str(),
        ];
        if let Some(location) = &self.location {
            fields.push(location.as_str());
        }
        fields
    }
}

impl Searchable for CalendarRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Organizer;
    use chrono::NaiveDate;

    #[test]
    fn test_saved_items_impls() {
        let id = Uuid::from_u128(7);
        let other = Uuid::from_u128(8);

        let hash: HashSet<Uuid> = [id].into_iter().collect();
        assert!(hash.is_saved(id));
        assert!(!hash.is_saved(other));

        let slice: &[Uuid] = &[id];
        assert!(slice.is_saved(id));

        assert!(!NoSavedItems.is_saved(id));
    }

    #[test]
    fn test_event_search_fields_skip_missing_location() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let event = EventRecord::new("Title", start, Organizer::new("Host"));
        assert_eq!(event.search_fields(), vec!["Title", "", "Host"]);

        let event = event.with_location("Berlin");
        assert_eq!(event.search_fields(), vec!["Title", "", "Host", "Berlin"]);
    }
}
