use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::state::SortKey;
use crate::calendar::{CalendarRecord, EventRecord};

/// Folds a title to its collation key: canonical decomposition with accents
/// and case removed, so `Éclair` sorts with `eclair`.
fn collation_key(title: &str) -> impl Iterator<Item = char> + '_ {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Compares two titles at base-letter strength: accents and case are ignored.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(collation_key(b))
}

/// Compares two events by `key` alone, without any secondary key.
pub fn compare_events(a: &EventRecord, b: &EventRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.start.cmp(&b.start),
        SortKey::Title => compare_titles(&a.title, &b.title),
        SortKey::Popularity => b.registered_count.cmp(&a.registered_count),
        SortKey::Capacity => b
            .total_capacity
            .unwrap_or(0)
            .cmp(&a.total_capacity.unwrap_or(0)),
    }
}

/// Sorts events by `key`. Equal keys keep their input order.
pub fn sort_events(events: &mut [&EventRecord], key: SortKey) {
    events.sort_by(|a, b| compare_events(a, b, key));
}

/// Orderings offered on the calendar management screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSortKey {
    /// Ascending by name, case-insensitive.
    #[default]
    Name,
    /// Descending by subscriber count.
    Subscribers,
    /// Descending by event count.
    Events,
    /// Most recent last event first; calendars without events go last.
    Recent,
}

/// Sorts calendars by `key`. Equal keys keep their input order.
pub fn sort_calendars(calendars: &mut [&CalendarRecord], key: CalendarSortKey) {
    calendars.sort_by(|a, b| match key {
        CalendarSortKey::Name => compare_titles(&a.name, &b.name),
        CalendarSortKey::Subscribers => b.subscriber_count.cmp(&a.subscriber_count),
        CalendarSortKey::Events => b.event_count.cmp(&a.event_count),
        CalendarSortKey::Recent => match (a.last_event_at, b.last_event_at) {
            (Some(a_last), Some(b_last)) => b_last.cmp(&a_last),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Organizer;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn event(title: &str, day: u32, hour: u32) -> EventRecord {
        EventRecord::new(title, at(day, hour), Organizer::new("Host"))
    }

    fn titles(events: &[&EventRecord]) -> Vec<String> {
        events.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_sort_by_date_ascending() {
        let late = event("Late", 3, 18);
        let early = event("Early", 1, 9);
        let noon = event("Noon", 3, 12);
        let mut events = vec![&late, &early, &noon];

        sort_events(&mut events, SortKey::Date);

        assert_eq!(titles(&events), vec!["Early", "Noon", "Late"]);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let b = event("beta", 1, 9);
        let a = event("Alpha", 1, 9);
        let c = event("Gamma", 1, 9);
        let mut events = vec![&c, &b, &a];

        sort_events(&mut events, SortKey::Title);

        assert_eq!(titles(&events), vec!["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn test_sort_by_title_folds_accents() {
        let zumba = event("Zumba Night", 1, 9);
        let eclair = event("Éclair Workshop", 1, 9);
        let dance = event("dance Party", 1, 9);
        let mut events = vec![&zumba, &eclair, &dance];

        sort_events(&mut events, SortKey::Title);

        assert_eq!(
            titles(&events),
            vec!["dance Party", "Éclair Workshop", "Zumba Night"]
        );
    }

    #[test]
    fn test_compare_titles_ignores_accent_and_case() {
        assert_eq!(compare_titles("Café", "cafe"), Ordering::Equal);
        assert_eq!(compare_titles("Ñandú", "Zoo"), Ordering::Less);
        assert_eq!(compare_titles("Über", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_sort_by_popularity_descending() {
        let small = event("Small", 1, 9).with_registered(5);
        let big = event("Big", 1, 9).with_registered(90);
        let mid = event("Mid", 1, 9).with_registered(40);
        let mut events = vec![&small, &big, &mid];

        sort_events(&mut events, SortKey::Popularity);

        assert_eq!(titles(&events), vec!["Big", "Mid", "Small"]);
    }

    #[test]
    fn test_sort_by_capacity_treats_missing_as_zero() {
        let unlimited = event("Unlimited", 1, 9);
        let hall = event("Hall", 1, 9).with_capacity(300);
        let room = event("Room", 1, 9).with_capacity(20);
        let mut events = vec![&unlimited, &room, &hall];

        sort_events(&mut events, SortKey::Capacity);

        assert_eq!(titles(&events), vec!["Hall", "Room", "Unlimited"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let first = event("First", 1, 9).with_registered(10);
        let second = event("Second", 2, 9).with_registered(10);
        let top = event("Top", 3, 9).with_registered(50);

        let mut events = vec![&first, &top, &second];
        sort_events(&mut events, SortKey::Popularity);
        assert_eq!(titles(&events), vec!["Top", "First", "Second"]);

        let mut reordered = vec![&second, &top, &first];
        sort_events(&mut reordered, SortKey::Popularity);
        assert_eq!(titles(&reordered), vec!["Top", "Second", "First"]);
    }

    #[test]
    fn test_same_title_different_case_keeps_order() {
        let upper = event("Rust", 1, 9);
        let lower = event("rust", 2, 9);
        let mut events = vec![&upper, &lower];

        sort_events(&mut events, SortKey::Title);

        assert_eq!(titles(&events), vec!["Rust", "rust"]);
    }

    #[test]
    fn test_sort_calendars() {
        let created = at(1, 0);
        let quiet = CalendarRecord::new("quiet", created).with_counts(5, 1);
        let busy = CalendarRecord::new("Busy", created)
            .with_counts(500, 40)
            .with_last_event(at(3, 0));
        let recent = CalendarRecord::new("Recent", created)
            .with_counts(50, 4)
            .with_last_event(at(9, 0));
        let names = |cals: &[&CalendarRecord]| -> Vec<String> {
            cals.iter().map(|c| c.name.clone()).collect()
        };

        let mut cals = vec![&quiet, &busy, &recent];
        sort_calendars(&mut cals, CalendarSortKey::Name);
        assert_eq!(names(&cals), vec!["Busy", "quiet", "Recent"]);

        sort_calendars(&mut cals, CalendarSortKey::Subscribers);
        assert_eq!(names(&cals), vec!["Busy", "Recent", "quiet"]);

        sort_calendars(&mut cals, CalendarSortKey::Recent);
        assert_eq!(names(&cals), vec!["Recent", "Busy", "quiet"]);
    }
}
