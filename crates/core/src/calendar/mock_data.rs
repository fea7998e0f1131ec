//! Mock data generation for demos, tests and the CLI.
//!
//! This module contains pure functions for generating a dashboard dataset.
//! Identifiers are derived from the record index so the same arguments
//! always produce the same records.

use super::types::{
    CalendarRecord, CalendarStatus, EventRecord, EventStatus, Organizer, TicketType,
};
use chrono::{Duration, NaiveDateTime};
use uuid::Uuid;

const EVENT_ID_BASE: u128 = 0x0e00_0000;
const ORGANIZER_ID_BASE: u128 = 0x0a00_0000;
const CALENDAR_ID_BASE: u128 = 0x0c00_0000;

const TITLES: [&str; 12] = [
    "AI Robotics Hackathon",
    "Founders Connect Breakfast",
    "Spring Design Showcase",
    "Networking Night",
    "hackathon for Startups in Asia",
    "Applied AI Summit",
    "Rust Workshop",
    "Community Book Club",
    "Product Demo Showcase",
    "Women in Tech Connect",
    "Open Source Sprint",
    "Climate Data Hackathon",
];

const DESCRIPTIONS: [&str; 6] = [
    "Build something new over a weekend with mentors on site.",
    "Meet founders and operators over coffee.",
    "Student and studio work presented to the public.",
    "An evening of introductions and short talks.",
    "Hands-on sessions with practitioners.",
    "A relaxed gathering for members and guests.",
];

const LOCATIONS: [&str; 5] = ["San Francisco", "Berlin", "Singapore", "Online", "New York"];

const ORGANIZERS: [&str; 4] = ["Lumen Labs", "Open Circle", "Northwind Guild", "Studio Nine"];

const TAGS: [&str; 6] = ["tech", "design", "startups", "community", "ai", "workshop"];

/// Generate mock events spread around `now`.
///
/// Roughly a third of the events fall before `now` (marked `past`, with
/// every seventh one `cancelled`), events on the same day as `now` that have
/// already started are `live`, and the rest are `upcoming`.
///
/// # Example
///
/// ```
/// use eventdash_core::calendar::generate_seed_events;
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2024, 6, 15)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
/// let events = generate_seed_events(now, 20);
///
/// assert_eq!(events.len(), 20);
/// assert_eq!(events, generate_seed_events(now, 20));
/// ```
pub fn generate_seed_events(now: NaiveDateTime, count: u32) -> Vec<EventRecord> {
    let organizers: Vec<Organizer> = ORGANIZERS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Organizer::new(*name).with_id(Uuid::from_u128(ORGANIZER_ID_BASE + i as u128))
        })
        .collect();

    let past_count = count / 3;
    let midnight = now.date().and_time(chrono::NaiveTime::MIN);

    (0..count)
        .map(|i| {
            let idx = i as usize;
            let day_offset = i as i64 - past_count as i64;
            let hour = 8 + (i % 11) as i64;
            let start = midnight + Duration::days(day_offset) + Duration::hours(hour);

            let status = if start.date() < now.date() {
                if i % 7 == 6 {
                    EventStatus::Cancelled
                } else {
                    EventStatus::Past
                }
            } else if start.date() == now.date() && start <= now {
                EventStatus::Live
            } else {
                EventStatus::Upcoming
            };

            let mut event = EventRecord::new(
                TITLES[idx % TITLES.len()],
                start,
                organizers[idx % organizers.len()].clone(),
            )
            .with_id(Uuid::from_u128(EVENT_ID_BASE + i as u128))
            .with_description(DESCRIPTIONS[idx % DESCRIPTIONS.len()])
            .with_status(status)
            .with_registered(12 + (i * 17) % 140);

            // Every fifth event is online-only with no venue recorded.
            if i % 5 != 4 {
                event = event.with_location(LOCATIONS[idx % LOCATIONS.len()]);
            }
            if i % 4 != 3 {
                event = event.with_capacity(50 + (i % 4) * 50);
            }
            if i % 6 != 5 {
                event = event.with_tags([TAGS[idx % TAGS.len()], TAGS[(idx + 2) % TAGS.len()]]);
            }

            event = match i % 3 {
                0 => event.with_ticket(TicketType::free("General Admission")),
                1 => event
                    .with_ticket(TicketType::new("Standard", 25.0 + (i % 4) as f64 * 5.0))
                    .with_ticket(TicketType::new("VIP", 120.0)),
                _ => event
                    .with_ticket(TicketType::free("Community"))
                    .with_ticket(TicketType::new("Supporter", 15.0)),
            };

            let known = (i % 8) as usize;
            event.with_attendees((0..known).map(|n| format!("Attendee {}", n + 1)))
        })
        .collect()
}

/// Generate the calendars shown on the management screen.
pub fn generate_seed_calendars(now: NaiveDateTime) -> Vec<CalendarRecord> {
    // (name, description, status, subscribers, events, days since last event)
    let seeds: [(&str, &str, CalendarStatus, u32, u32, Option<i64>); 5] = [
        (
            "Tech Meetups",
            "Talks and hack nights for engineers.",
            CalendarStatus::Active,
            1240,
            36,
            Some(2),
        ),
        (
            "Design Guild",
            "Critiques, showcases and portfolio reviews.",
            CalendarStatus::Active,
            480,
            14,
            Some(9),
        ),
        (
            "Founders Circle",
            "Private breakfasts for startup founders.",
            CalendarStatus::Archived,
            95,
            22,
            Some(120),
        ),
        (
            "Climate Network",
            "Volunteer projects and data hackathons.",
            CalendarStatus::Draft,
            0,
            0,
            None,
        ),
        (
            "Book Club",
            "Monthly reading group.",
            CalendarStatus::Active,
            60,
            11,
            Some(30),
        ),
    ];

    seeds
        .into_iter()
        .enumerate()
        .map(|(i, (name, description, status, subscribers, events, last_days_ago))| {
            let created_at = now - Duration::days(400 - i as i64 * 60);
            let mut calendar = CalendarRecord::new(name, created_at)
                .with_id(Uuid::from_u128(CALENDAR_ID_BASE + i as u128))
                .with_description(description)
                .with_status(status)
                .with_counts(subscribers, events);
            if let Some(days) = last_days_ago {
                calendar = calendar.with_last_event(now - Duration::days(days));
            }
            calendar
        })
        .collect()
}
