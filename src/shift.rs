//! Shift end time parsing and due date calculation
//!
//! Due dates anchor to a calendar date with the time of day replaced by an
//! instructor's configured shift end. There is no rollover to the next day:
//! a tool issued after the shift end is due in the past, and overdue checks
//! are a plain read-time comparison against that timestamp.

use chrono::{DateTime, NaiveTime, Utc};

/// Shift end applied when an instructor record is missing or carries an
/// unparseable time.
pub const DEFAULT_SHIFT_END: &str = "14:00";

/// Parse an `HH:mm` shift end time.
pub fn parse_shift_end(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Parse an `HH:mm` shift end time, falling back to [`DEFAULT_SHIFT_END`].
pub fn shift_end_or_default(value: &str) -> NaiveTime {
    parse_shift_end(value)
        .or_else(|| parse_shift_end(DEFAULT_SHIFT_END))
        .unwrap_or_default()
}

/// Compute a due date: the anchor's calendar date with the time of day
/// replaced by `shift_end`, seconds zeroed.
pub fn due_date(anchor: DateTime<Utc>, shift_end: NaiveTime) -> DateTime<Utc> {
    anchor.date_naive().and_time(shift_end).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_shift_end() {
        assert_eq!(
            parse_shift_end("14:00"),
            NaiveTime::from_hms_opt(14, 0, 0)
        );
        assert_eq!(
            parse_shift_end("09:30"),
            NaiveTime::from_hms_opt(9, 30, 0)
        );
        assert_eq!(parse_shift_end(""), None);
        assert_eq!(parse_shift_end("25:00"), None);
        assert_eq!(parse_shift_end("2pm"), None);
    }

    #[test]
    fn test_shift_end_or_default() {
        let fallback = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
        assert_eq!(shift_end_or_default("garbage"), fallback);
        assert_eq!(
            shift_end_or_default("20:15"),
            NaiveTime::from_hms_opt(20, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_due_date_replaces_time_of_day() {
        let issued = "2026-03-02T08:12:45Z".parse::<DateTime<Utc>>().unwrap();
        let due = due_date(issued, NaiveTime::from_hms_opt(16, 30, 0).unwrap());
        assert_eq!(due.date_naive(), issued.date_naive());
        assert_eq!((due.hour(), due.minute(), due.second()), (16, 30, 0));
    }

    #[test]
    fn test_due_date_does_not_roll_over() {
        // Issued after the shift end: the due date lands in the past.
        let issued = "2026-03-02T18:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let due = due_date(issued, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert!(due < issued);
        assert_eq!(due.date_naive(), issued.date_naive());
    }
}
