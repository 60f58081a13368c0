use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{Date, OffsetDateTime};
use validator::Validate;

use crate::scheduling::interval::{format_hhmm, parse_hhmm, TimeParseError, MINUTES_PER_DAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }

    /// confirmed -> {cancelled, completed}; terminal states stay put and
    /// nothing returns to confirmed.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Confirmed, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
        )
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub staff_id: Uuid,
    pub service_id: Uuid,
    pub sub_category: String,
    pub date: Date,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i32,
    pub price: f64,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub staff_id: Uuid,
    pub service_id: Uuid,
    #[validate(length(min = 1, message = "Sub-category must not be empty"))]
    pub sub_category: String,
    pub date: Date,
    pub start_time: String,
    #[validate(range(min = 1, max = 1439, message = "Duration must fit within one day"))]
    pub duration_minutes: i32,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    pub notes: Option<String>,
}

impl NewBooking {
    /// End time is derived from start plus duration; a client-supplied
    /// end time is never trusted. Errors when the start is malformed or
    /// the booking would run past midnight.
    pub fn end_time(&self) -> Result<String, TimeParseError> {
        let start = parse_hhmm(&self.start_time)?;
        let end = start as u32 + self.duration_minutes as u32;
        if end >= MINUTES_PER_DAY as u32 {
            return Err(TimeParseError::OutOfRange(format!(
                "{} + {}min",
                self.start_time, self.duration_minutes
            )));
        }
        Ok(format_hhmm(end as u16))
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusPayload {
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn request(start_time: &str, duration_minutes: i32) -> NewBooking {
        NewBooking {
            staff_id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            sub_category: "Beard Trim".to_string(),
            date: date!(2025 - 06 - 09),
            start_time: start_time.to_string(),
            duration_minutes,
            price: 25.0,
            notes: None,
        }
    }

    #[test]
    fn end_time_is_derived_from_start_and_duration() {
        assert_eq!(request("09:00", 30).end_time().unwrap(), "09:30");
        assert_eq!(request("09:45", 45).end_time().unwrap(), "10:30");
        assert_eq!(request("22:00", 119).end_time().unwrap(), "23:59");
    }

    #[test]
    fn bookings_may_not_reach_midnight() {
        assert!(request("23:00", 60).end_time().is_err());
        assert!(request("23:30", 60).end_time().is_err());
        assert!(request("nope", 30).end_time().is_err());
    }

    #[test]
    fn confirmed_may_cancel_or_complete() {
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Confirmed));
    }

    #[test]
    fn terminal_states_do_not_transition() {
        for terminal in [BookingStatus::Cancelled, BookingStatus::Completed] {
            assert!(terminal.is_terminal());
            for next in [
                BookingStatus::Confirmed,
                BookingStatus::Cancelled,
                BookingStatus::Completed,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
        assert!(!BookingStatus::Confirmed.is_terminal());
    }
}
