mod error;
mod mock_data;
mod operations;
mod types;

pub use error::RecordError;
pub use mock_data::{generate_seed_calendars, generate_seed_events};
pub use operations::{validate_calendar, validate_event};
pub use types::{
    CalendarRecord, CalendarStatus, EventRecord, EventStatus, Organizer, TicketType,
};
