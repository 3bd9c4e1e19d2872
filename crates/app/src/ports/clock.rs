//! Clock port — read the current wall-clock time.

use chronohub_domain::time::CalendarTime;

/// Supplies the current wall-clock time as calendar fields.
///
/// The scheduler polls this once per tick. A clock that is not yet valid
/// (RTC unsynchronized after boot) returns `None`; such ticks are skipped
/// without touching trigger watermarks.
pub trait ClockSource {
    /// Read the current time, or `None` while the clock is not valid.
    fn now(&self) -> Option<CalendarTime>;
}

impl<T: ClockSource> ClockSource for std::sync::Arc<T> {
    fn now(&self) -> Option<CalendarTime> {
        (**self).now()
    }
}
