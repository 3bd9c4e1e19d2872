//! Clock source adapters.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Datelike, NaiveDate, TimeDelta, Timelike, Utc};

use chronohub_app::ports::ClockSource;
use chronohub_domain::time::CalendarTime;

/// Reads the host clock in UTC.
///
/// The reading is a straight field copy of the calendar decomposition;
/// `None` only for years outside the `u16` model, which a sane host clock
/// never produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> Option<CalendarTime> {
        CalendarTime::from_chrono(&Utc::now())
    }
}

/// A clock whose reading is set by hand.
///
/// Starts invalid (`now()` returns `None`), like an RTC before its first
/// sync. Clones share the same reading, so a demo loop and the scheduler
/// can hold the same clock.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    reading: Arc<Mutex<Option<CalendarTime>>>,
}

impl ManualClock {
    /// A clock with no reading yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock already set to `time`.
    #[must_use]
    pub fn starting_at(time: CalendarTime) -> Self {
        let clock = Self::new();
        clock.set(time);
        clock
    }

    /// Set the current reading.
    pub fn set(&self, time: CalendarTime) {
        *self.lock() = Some(time);
    }

    /// Clear the reading, making the clock invalid again.
    pub fn invalidate(&self) {
        *self.lock() = None;
    }

    /// Step the reading forward by whole seconds, carrying through
    /// minutes, hours, and calendar dates. No-op while invalid.
    pub fn advance_secs(&self, seconds: u32) {
        let mut reading = self.lock();
        let Some(current) = *reading else { return };
        if let Some(stepped) = step(current, seconds) {
            *reading = Some(stepped);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<CalendarTime>> {
        self.reading.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> Option<CalendarTime> {
        *self.lock()
    }
}

/// Calendar-aware second stepping via chrono's naive datetime arithmetic.
fn step(time: CalendarTime, seconds: u32) -> Option<CalendarTime> {
    let date = NaiveDate::from_ymd_opt(
        i32::from(time.year),
        u32::from(time.month),
        u32::from(time.day),
    )?;
    let dt = date.and_hms_opt(
        u32::from(time.hour),
        u32::from(time.minute),
        u32::from(time.second),
    )?;
    let stepped = dt.checked_add_signed(TimeDelta::seconds(i64::from(seconds)))?;
    Some(CalendarTime {
        year: u16::try_from(stepped.year()).ok()?,
        month: stepped.month() as u8,
        day: stepped.day() as u8,
        hour: stepped.hour() as u8,
        minute: stepped.minute() as u8,
        second: stepped.second() as u8,
    })
}
