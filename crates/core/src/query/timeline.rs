//! Day buckets for the timeline view.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::EventRecord;

/// Events starting on the same calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineBucket<'a> {
    pub date: NaiveDate,
    pub label: String,
    pub events: Vec<&'a EventRecord>,
}

impl TimelineBucket<'_> {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Formats a bucket heading: `Today Sunday` for `today`, `5 Mar Tuesday` otherwise.
pub fn bucket_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        format!("Today {}", date.format("%A"))
    } else {
        date.format("%-d %b %A").to_string()
    }
}

/// Groups events by start day.
///
/// Buckets appear in the order their day first occurs in `events`; the input
/// is expected to be sorted by date already and is not re-sorted here.
pub fn bucket_by_day<'a>(events: &[&'a EventRecord], today: NaiveDate) -> Vec<TimelineBucket<'a>> {
    let mut buckets: Vec<TimelineBucket<'a>> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for &event in events {
        let date = event.date();
        let slot = *index.entry(date).or_insert_with(|| {
            buckets.push(TimelineBucket {
                date,
                label: bucket_label(date, today),
                events: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].events.push(event);
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Organizer;

    fn date(day: u32) -> NaiveDate {
        // March 2024: the 10th is a Sunday.
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn event(title: &str, day: u32, hour: u32) -> EventRecord {
        EventRecord::new(
            title,
            date(day).and_hms_opt(hour, 0, 0).unwrap(),
            Organizer::new("Host"),
        )
    }

    #[test]
    fn test_bucket_label() {
        assert_eq!(bucket_label(date(10), date(10)), "Today Sunday");
        assert_eq!(bucket_label(date(5), date(10)), "5 Mar Tuesday");
        assert_eq!(bucket_label(date(12), date(10)), "12 Mar Tuesday");
    }

    #[test]
    fn test_three_events_two_days() {
        let a = event("Breakfast", 10, 8);
        let b = event("Lunch", 10, 12);
        let c = event("Workshop", 11, 9);
        let sorted = vec![&a, &b, &c];

        let buckets = bucket_by_day(&sorted, date(10));

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "Today Sunday");
        assert_eq!(buckets[0].events, vec![&a, &b]);
        assert_eq!(buckets[1].label, "11 Mar Monday");
        assert_eq!(buckets[1].events, vec![&c]);
    }

    #[test]
    fn test_bucket_order_follows_input() {
        let late = event("Late", 20, 9);
        let early = event("Early", 15, 9);
        let input = vec![&late, &early];

        let buckets = bucket_by_day(&input, date(1));

        assert_eq!(buckets[0].date, date(20));
        assert_eq!(buckets[1].date, date(15));
    }

    #[test]
    fn test_repeated_day_joins_existing_bucket() {
        let a = event("A", 15, 9);
        let b = event("B", 16, 9);
        let c = event("C", 15, 18);
        let input = vec![&a, &b, &c];

        let buckets = bucket_by_day(&input, date(1));

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].len(), 2);
        assert_eq!(buckets[1].len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(bucket_by_day(&[], date(10)).is_empty());
    }
}
