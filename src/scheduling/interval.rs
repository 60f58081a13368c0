use thiserror::Error;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("time must be formatted as HH:MM")]
    Format,

    #[error("time {0} is out of range")]
    OutOfRange(String),
}

/// Parse an "HH:MM" clock time into minutes since midnight.
pub fn parse_hhmm(value: &str) -> Result<u16, TimeParseError> {
    let (hours, minutes) = value.split_once(':').ok_or(TimeParseError::Format)?;
    let hours: u16 = hours.parse().map_err(|_| TimeParseError::Format)?;
    let minutes: u16 = minutes.parse().map_err(|_| TimeParseError::Format)?;

    if hours > 23 || minutes > 59 {
        return Err(TimeParseError::OutOfRange(value.to_string()));
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as a zero-padded "HH:MM" string.
pub fn format_hhmm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// A half-open `[start, end)` span of minutes within one day for one
/// staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: u16,
    pub end: u16,
}

impl TimeInterval {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn from_times(start: &str, end: &str) -> Result<Self, TimeParseError> {
        Ok(Self {
            start: parse_hhmm(start)?,
            end: parse_hhmm(end)?,
        })
    }

    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_clock_times() {
        assert_eq!(parse_hhmm("09:00"), Ok(540));
        assert_eq!(parse_hhmm("00:00"), Ok(0));
        assert_eq!(parse_hhmm("23:59"), Ok(1439));
        assert_eq!(format_hhmm(540), "09:00");
        assert_eq!(format_hhmm(0), "00:00");
        assert_eq!(format_hhmm(1439), "23:59");
        assert_eq!(format_hhmm(605), "10:05");
    }

    #[test]
    fn rejects_malformed_times() {
        assert_eq!(parse_hhmm("900"), Err(TimeParseError::Format));
        assert_eq!(parse_hhmm("ab:cd"), Err(TimeParseError::Format));
        assert_eq!(parse_hhmm(""), Err(TimeParseError::Format));
        assert_eq!(
            parse_hhmm("24:00"),
            Err(TimeParseError::OutOfRange("24:00".to_string()))
        );
        assert_eq!(
            parse_hhmm("10:60"),
            Err(TimeParseError::OutOfRange("10:60".to_string()))
        );
    }

    #[test]
    fn overlap_is_symmetric() {
        let pairs = [
            (TimeInterval::new(540, 600), TimeInterval::new(570, 630)),
            (TimeInterval::new(540, 600), TimeInterval::new(600, 660)),
            (TimeInterval::new(540, 720), TimeInterval::new(600, 630)),
            (TimeInterval::new(540, 600), TimeInterval::new(540, 600)),
            (TimeInterval::new(540, 600), TimeInterval::new(720, 780)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn adjacent_intervals_do_not_overlap() {
        let first = TimeInterval::new(600, 630);
        let second = TimeInterval::new(630, 660);
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn containment_overlaps() {
        let outer = TimeInterval::new(540, 720);
        let inner = TimeInterval::new(600, 630);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
