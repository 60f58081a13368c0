use super::interval::{format_hhmm, TimeInterval};
use super::schedule::DayWindow;

/// Candidates step at a fixed half-hour regardless of service duration.
pub const SLOT_STEP_MINUTES: u16 = 30;

/// Lazy, ascending enumeration of bookable start times. Recreating the
/// iterator (or cloning it) restarts the sequence; identical inputs
/// always yield identical output.
#[derive(Debug, Clone)]
pub struct Slots {
    cursor: u16,
    window_end: u16,
    duration: u16,
    busy: Vec<TimeInterval>,
}

/// Start times within `window` at which a service of `duration_minutes`
/// both finishes by closing and overlaps none of `busy`.
pub fn available_slots(window: DayWindow, duration_minutes: u16, busy: &[TimeInterval]) -> Slots {
    Slots {
        cursor: window.start,
        window_end: window.end,
        duration: duration_minutes,
        busy: busy.to_vec(),
    }
}

impl Iterator for Slots {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.cursor + self.duration <= self.window_end {
            let candidate = TimeInterval::new(self.cursor, self.cursor + self.duration);
            let start = self.cursor;
            self.cursor += SLOT_STEP_MINUTES;

            if !self.busy.iter().any(|booked| candidate.overlaps(booked)) {
                return Some(format_hhmm(start));
            }
        }
        None
    }
}
