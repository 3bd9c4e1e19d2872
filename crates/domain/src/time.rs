//! Time and timestamp helpers.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// UTC timestamp used for event times and the like.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// A six-field wall-clock reading, as supplied by a clock source.
///
/// This is a plain calendar decomposition — no time zone, no epoch offset.
/// Ordering is lexicographic over `(year, month, day, hour, minute, second)`,
/// which matches chronological order for well-formed readings; the derive
/// relies on the field declaration order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CalendarTime {
    /// Decompose a chrono datetime into calendar fields by straight copy.
    ///
    /// Returns `None` when the year does not fit a `u16` (proleptic dates
    /// before year 0 or past 65535 are outside this model).
    #[must_use]
    pub fn from_chrono<Tz: TimeZone>(dt: &DateTime<Tz>) -> Option<Self> {
        let year = u16::try_from(dt.year()).ok()?;
        // month/day/hour/minute/second are already range-limited by chrono.
        Some(Self {
            year,
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
        })
    }
}

impl std::fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> CalendarTime {
        CalendarTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_order_readings_chronologically() {
        let earlier = at(2024, 3, 10, 12, 30, 44);
        let later = at(2024, 3, 10, 12, 30, 45);
        assert!(earlier < later);

        let next_day = at(2024, 3, 11, 0, 0, 0);
        assert!(later < next_day);

        let next_year = at(2025, 1, 1, 0, 0, 0);
        assert!(next_day < next_year);
    }

    #[test]
    fn should_copy_fields_from_chrono_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 10, 12, 30, 45).unwrap();
        let reading = CalendarTime::from_chrono(&dt).unwrap();
        assert_eq!(reading, at(2024, 3, 10, 12, 30, 45));
    }

    #[test]
    fn should_reject_years_outside_u16() {
        let dt = Utc.with_ymd_and_hms(-1, 1, 1, 0, 0, 0).unwrap();
        assert!(CalendarTime::from_chrono(&dt).is_none());

        let dt = Utc.with_ymd_and_hms(70_000, 1, 1, 0, 0, 0).unwrap();
        assert!(CalendarTime::from_chrono(&dt).is_none());
    }

    #[test]
    fn should_display_in_canonical_text_form() {
        assert_eq!(at(2024, 1, 5, 7, 8, 9).to_string(), "2024-01-05 07:08:09");
    }
}
