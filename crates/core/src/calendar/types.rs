use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Live,
    Past,
    Cancelled,
}

impl EventStatus {
    /// Returns the lowercase name used by list badges.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Live => "live",
            EventStatus::Past => "past",
            EventStatus::Cancelled => "cancelled",
        }
    }

    /// Returns true for events that have not finished yet.
    pub fn is_open(&self) -> bool {
        matches!(self, EventStatus::Upcoming | EventStatus::Live)
    }
}

/// Publication status of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarStatus {
    Active,
    Archived,
    Draft,
}

impl CalendarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarStatus::Active => "active",
            CalendarStatus::Archived => "archived",
            CalendarStatus::Draft => "draft",
        }
    }
}

/// The person or group hosting an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    pub id: Uuid,
    pub name: String,
}

impl Organizer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Sets a specific ID for this organizer (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A ticket tier offered for an event. A price of zero means the tier is free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketType {
    pub name: String,
    pub price: f64,
}

impl TicketType {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Creates a zero-priced ticket tier.
    pub fn free(name: impl Into<String>) -> Self {
        Self::new(name, 0.0)
    }

    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

/// An event as supplied by the dataset. The query engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Start date and time, in the dashboard's local time.
    pub start: NaiveDateTime,
    #[serde(default)]
    pub location: Option<String>,
    pub organizer: Organizer,
    pub status: EventStatus,
    #[serde(default)]
    pub registered_count: u32,
    /// Maximum number of attendees. `None` means there is no ceiling.
    #[serde(default)]
    pub total_capacity: Option<u32>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub ticket_types: Vec<TicketType>,
    /// Attendees whose names are known to the dashboard (a subset of `registered_count`).
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl EventRecord {
    /// Creates an upcoming event with no tickets, tags or capacity ceiling.
    pub fn new(title: impl Into<String>, start: NaiveDateTime, organizer: Organizer) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            start,
            location: None,
            organizer,
            status: EventStatus::Upcoming,
            registered_count: 0,
            total_capacity: None,
            tags: None,
            ticket_types: Vec::new(),
            attendees: Vec::new(),
        }
    }

    /// Returns the calendar day the event starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_registered(mut self, registered_count: u32) -> Self {
        self.registered_count = registered_count;
        self
    }

    pub fn with_capacity(mut self, total_capacity: u32) -> Self {
        self.total_capacity = Some(total_capacity);
        self
    }

    /// Sets the tag set, replacing any previous tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_ticket(mut self, ticket: TicketType) -> Self {
        self.ticket_types.push(ticket);
        self
    }

    pub fn with_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attendees = attendees.into_iter().map(Into::into).collect();
        self
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A calendar listed on the management screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subscriber_count: u32,
    #[serde(default)]
    pub event_count: u32,
    pub status: CalendarStatus,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub last_event_at: Option<NaiveDateTime>,
}

impl CalendarRecord {
    /// Creates an active calendar with no subscribers or events.
    pub fn new(name: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            subscriber_count: 0,
            event_count: 0,
            status: CalendarStatus::Active,
            created_at,
            last_event_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: CalendarStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_counts(mut self, subscriber_count: u32, event_count: u32) -> Self {
        self.subscriber_count = subscriber_count;
        self.event_count = event_count;
        self
    }

    pub fn with_last_event(mut self, last_event_at: NaiveDateTime) -> Self {
        self.last_event_at = Some(last_event_at);
        self
    }

    /// Sets a specific ID for this calendar (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}
