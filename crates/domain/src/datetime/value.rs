//! The six-field calendar value held by a datetime entity.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::CalendarTime;

/// A calendar date and wall-clock time, second precision.
///
/// Equality is field-wise. The struct itself can hold out-of-range fields
/// (it is also the raw decode target for snapshots); [`validate`] is the
/// single source of truth for calendar correctness, and an entity only ever
/// holds values that pass it.
///
/// [`validate`]: Self::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeValue {
    pub year: u16,
    /// 1–12.
    pub month: u8,
    /// 1–31, further bounded by month and leap year.
    pub day: u8,
    /// 0–23.
    pub hour: u8,
    /// 0–59.
    pub minute: u8,
    /// 0–59.
    pub second: u8,
}

impl Default for DateTimeValue {
    /// The epoch instant, `1970-01-01 00:00:00`.
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

/// Proleptic Gregorian leap year rule: divisible by 4, and when divisible
/// by 100 also divisible by 400.
#[must_use]
pub(crate) fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `(year, month)`. `month` must already be in 1–12.
pub(crate) fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

impl DateTimeValue {
    /// Check calendar correctness.
    ///
    /// # Errors
    ///
    /// Returns the first field that violates its range, checked in calendar
    /// order; day-of-month bounds account for leap years.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=12).contains(&self.month) {
            return Err(ValidationError::MonthOutOfRange(self.month));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(ValidationError::DayOutOfMonth {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 {
            return Err(ValidationError::HourOutOfRange(self.hour));
        }
        if self.minute > 59 {
            return Err(ValidationError::MinuteOutOfRange(self.minute));
        }
        if self.second > 59 {
            return Err(ValidationError::SecondOutOfRange(self.second));
        }
        Ok(())
    }

    /// Whether [`validate`](Self::validate) succeeds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Conversions to and from the clock representation are straight field
/// copies; no epoch or time-zone arithmetic happens at this layer.
impl From<CalendarTime> for DateTimeValue {
    fn from(time: CalendarTime) -> Self {
        Self {
            year: time.year,
            month: time.month,
            day: time.day,
            hour: time.hour,
            minute: time.minute,
            second: time.second,
        }
    }
}

impl From<DateTimeValue> for CalendarTime {
    fn from(value: DateTimeValue) -> Self {
        Self {
            year: value.year,
            month: value.month,
            day: value.day,
            hour: value.hour,
            minute: value.minute,
            second: value.second,
        }
    }
}

impl std::fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for DateTimeValue {
    type Err = ValidationError;

    /// Parse the literal form `YYYY-MM-DD HH:MM:SS` (separators `-`, one
    /// space, `:`). Components are plain decimal integers; calendar
    /// correctness is *not* checked here — that stays deferred to commit
    /// time, like any other sparse edit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MalformedText {
            input: s.to_string(),
        };

        let (date, time) = s.split_once(' ').ok_or_else(malformed)?;

        let mut date_parts = date.split('-');
        let year = parse_component(date_parts.next()).ok_or_else(malformed)?;
        let month = parse_component(date_parts.next()).ok_or_else(malformed)?;
        let day = parse_component(date_parts.next()).ok_or_else(malformed)?;
        if date_parts.next().is_some() {
            return Err(malformed());
        }

        let mut time_parts = time.split(':');
        let hour = parse_component(time_parts.next()).ok_or_else(malformed)?;
        let minute = parse_component(time_parts.next()).ok_or_else(malformed)?;
        let second = parse_component(time_parts.next()).ok_or_else(malformed)?;
        if time_parts.next().is_some() {
            return Err(malformed());
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }
}

fn parse_component<T: FromStr<Err = std::num::ParseIntError>>(part: Option<&str>) -> Option<T> {
    part?.parse().ok()
}
