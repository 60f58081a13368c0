use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Date, Weekday};

use super::interval::parse_hhmm;

#[derive(Debug, Error)]
#[error("working hours match neither known schedule shape")]
pub struct MalformedSchedule;

/// Lowercase weekday name for a calendar date, Sunday-first.
pub fn weekday_name(date: Date) -> &'static str {
    match date.weekday() {
        Weekday::Sunday => "sunday",
        Weekday::Monday => "monday",
        Weekday::Tuesday => "tuesday",
        Weekday::Wednesday => "wednesday",
        Weekday::Thursday => "thursday",
        Weekday::Friday => "friday",
        Weekday::Saturday => "saturday",
    }
}

/// A staff member's working hours, in one of the two shapes the data
/// layer still carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkingHours {
    Uniform(UniformHours),
    PerDay(HashMap<String, DayHours>),
}

/// One window plus a working-day set. Profiles written before the day
/// set was introduced omit it, which restricts nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniformHours {
    pub start_time: String,
    pub end_time: String,
    pub working_days: Option<Vec<String>>,
}

/// Legacy per-day entry. A missing `available` flag reads as off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHours {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub available: bool,
}

/// The `[start, end)` minutes during which a staff member accepts
/// bookings on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: u16,
    pub end: u16,
}

impl WorkingHours {
    pub fn from_value(value: &serde_json::Value) -> Result<Self, MalformedSchedule> {
        serde_json::from_value(value.clone()).map_err(|_| MalformedSchedule)
    }

    /// Canonical availability window for `date`, or `None` when the
    /// staff member is off that day. Unparseable or inverted times also
    /// resolve to `None`: no availability, never all availability.
    pub fn resolve(&self, date: Date) -> Option<DayWindow> {
        let day = weekday_name(date);

        let (start, end) = match self {
            WorkingHours::Uniform(hours) => {
                if let Some(days) = &hours.working_days {
                    if !days.iter().any(|d| d == day) {
                        return None;
                    }
                }
                (hours.start_time.as_str(), hours.end_time.as_str())
            }
            WorkingHours::PerDay(days) => {
                let entry = days.get(day)?;
                if !entry.available {
                    return None;
                }
                (entry.start.as_str(), entry.end.as_str())
            }
        };

        let start = parse_hhmm(start).ok()?;
        let end = parse_hhmm(end).ok()?;
        if start >= end {
            return None;
        }

        Some(DayWindow { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::date;

    // 2025-06-07 is a Saturday, 2025-06-08 a Sunday, 2025-06-09 a Monday.

    fn weekday_spec() -> WorkingHours {
        WorkingHours::from_value(&json!({
            "startTime": "09:00",
            "endTime": "18:00",
            "workingDays": ["monday", "tuesday", "wednesday", "thursday", "friday"]
        }))
        .unwrap()
    }

    #[test]
    fn weekday_names_follow_sunday_first_convention() {
        assert_eq!(weekday_name(date!(2025 - 06 - 08)), "sunday");
        assert_eq!(weekday_name(date!(2025 - 06 - 09)), "monday");
        assert_eq!(weekday_name(date!(2025 - 06 - 07)), "saturday");
    }

    #[test]
    fn uniform_spec_resolves_on_working_days_only() {
        let spec = weekday_spec();
        assert_eq!(
            spec.resolve(date!(2025 - 06 - 09)),
            Some(DayWindow { start: 540, end: 1080 })
        );
        assert_eq!(spec.resolve(date!(2025 - 06 - 07)), None);
        assert_eq!(spec.resolve(date!(2025 - 06 - 08)), None);
    }

    #[test]
    fn uniform_spec_without_day_set_works_every_day() {
        let spec = WorkingHours::from_value(&json!({
            "startTime": "10:00",
            "endTime": "16:00"
        }))
        .unwrap();
        assert_eq!(
            spec.resolve(date!(2025 - 06 - 07)),
            Some(DayWindow { start: 600, end: 960 })
        );
    }

    #[test]
    fn per_day_spec_honors_availability_flag() {
        let spec = WorkingHours::from_value(&json!({
            "monday": { "start": "09:00", "end": "17:00", "available": true },
            "tuesday": { "start": "09:00", "end": "17:00", "available": false },
            "wednesday": { "start": "11:00", "end": "15:00" }
        }))
        .unwrap();

        assert_eq!(
            spec.resolve(date!(2025 - 06 - 09)),
            Some(DayWindow { start: 540, end: 1020 })
        );
        // explicit available: false
        assert_eq!(spec.resolve(date!(2025 - 06 - 10)), None);
        // missing flag reads as off
        assert_eq!(spec.resolve(date!(2025 - 06 - 11)), None);
        // no entry at all
        assert_eq!(spec.resolve(date!(2025 - 06 - 12)), None);
    }

    #[test]
    fn malformed_schedules_are_rejected() {
        assert!(WorkingHours::from_value(&json!({ "open": "09:00" })).is_err());
        assert!(WorkingHours::from_value(&json!("09:00-18:00")).is_err());
        assert!(WorkingHours::from_value(&json!(null)).is_err());
    }

    #[test]
    fn inverted_or_unparseable_windows_resolve_to_none() {
        let inverted = WorkingHours::from_value(&json!({
            "startTime": "18:00",
            "endTime": "09:00",
            "workingDays": ["monday"]
        }))
        .unwrap();
        assert_eq!(inverted.resolve(date!(2025 - 06 - 09)), None);

        let garbled = WorkingHours::from_value(&json!({
            "monday": { "start": "soon", "end": "later", "available": true }
        }))
        .unwrap();
        assert_eq!(garbled.resolve(date!(2025 - 06 - 09)), None);
    }
}
