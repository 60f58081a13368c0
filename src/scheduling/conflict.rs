use time::Date;
use uuid::Uuid;

use super::interval::TimeInterval;
use crate::db::{Booking, BookingStatus};

/// Intervals occupied by confirmed bookings for one staff member on one
/// date. The snapshot query already scopes by staff, date and status;
/// filtering again here keeps the decision correct even over a wider
/// snapshot. Rows with unparseable times are skipped.
pub fn confirmed_intervals(bookings: &[Booking], staff_id: Uuid, date: Date) -> Vec<TimeInterval> {
    bookings
        .iter()
        .filter(|b| {
            b.staff_id == staff_id && b.date == date && b.status == BookingStatus::Confirmed
        })
        .filter_map(|b| TimeInterval::from_times(&b.start_time, &b.end_time).ok())
        .collect()
}

/// True when the proposed interval overlaps any confirmed one. An empty
/// snapshot never conflicts.
pub fn has_conflict(proposed: TimeInterval, confirmed: &[TimeInterval]) -> bool {
    confirmed.iter().any(|booked| proposed.overlaps(booked))
}
