use super::error::RecordError;
use super::types::{CalendarRecord, EventRecord};

/// Validates an event loaded from an external dataset.
pub fn validate_event(event: &EventRecord) -> Result<(), RecordError> {
    if event.title.trim().is_empty() {
        return Err(RecordError::EmptyTitle);
    }
    if event.title.chars().count() > 200 {
        return Err(RecordError::TitleTooLong);
    }
    if let Some(ticket) = event
        .ticket_types
        .iter()
        .find(|ticket| !ticket.price.is_finite() || ticket.price < 0.0)
    {
        return Err(RecordError::InvalidPrice(ticket.name.clone()));
    }
    Ok(())
}

/// Validates a calendar loaded from an external dataset.
pub fn validate_calendar(calendar: &CalendarRecord) -> Result<(), RecordError> {
    if calendar.name.trim().is_empty() {
        return Err(RecordError::EmptyName);
    }
    if calendar.name.chars().count() > 100 {
        return Err(RecordError::NameTooLong);
    }
    if calendar
        .last_event_at
        .is_some_and(|last| last < calendar.created_at)
    {
        return Err(RecordError::InvalidTimeline);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::types::{Organizer, TicketType};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn event(title: &str) -> EventRecord {
        EventRecord::new(title, at(15), Organizer::new("Host"))
    }

    #[test]
    fn test_validate_event_success() {
        let event = event("Valid Event").with_ticket(TicketType::new("Standard", 25.0));
        assert!(validate_event(&event).is_ok());
    }

    #[test]
    fn test_validate_event_empty_title() {
        assert_eq!(validate_event(&event("   ")), Err(RecordError::EmptyTitle));
    }

    #[test]
    fn test_validate_event_title_too_long() {
        let title = "x".repeat(201);
        assert_eq!(validate_event(&event(&title)), Err(RecordError::TitleTooLong));
    }

    #[test]
    fn test_validate_event_invalid_price() {
        let negative = event("Gala").with_ticket(TicketType::new("VIP", -5.0));
        assert_eq!(
            validate_event(&negative),
            Err(RecordError::InvalidPrice("VIP".to_string()))
        );

        let nan = event("Gala").with_ticket(TicketType::new("Door", f64::NAN));
        assert!(matches!(
            validate_event(&nan),
            Err(RecordError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_validate_calendar() {
        let calendar = CalendarRecord::new("Community", at(10)).with_last_event(at(12));
        assert!(validate_calendar(&calendar).is_ok());

        let unnamed = CalendarRecord::new(" ", at(10));
        assert_eq!(validate_calendar(&unnamed), Err(RecordError::EmptyName));

        let backwards = CalendarRecord::new("Community", at(10)).with_last_event(at(9));
        assert_eq!(
            validate_calendar(&backwards),
            Err(RecordError::InvalidTimeline)
        );
    }
}
