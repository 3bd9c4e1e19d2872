//! Clock-polling trigger that fires once when a target instant is reached.

use crate::time::CalendarTime;

/// Edge detector over a polled clock.
///
/// The trigger keeps a watermark: the last clock reading it observed. The
/// first poll only arms it (no fire, even when the target is already in the
/// past). Every later poll fires exactly when the target instant falls in
/// the half-open interval `(watermark, now]` — reached or passed since the
/// previous check — then advances the watermark regardless of outcome.
///
/// Matching is absolute: a target instant fires at most once, and a poll
/// gap larger than the tick period may skip it entirely. A clock reading
/// earlier than the watermark (resync, restart with a stale RTC) re-arms
/// the trigger without firing, so a resync can never replay a past target.
#[derive(Debug, Clone, Default)]
pub struct ScheduledTrigger {
    last_check: Option<CalendarTime>,
}

impl ScheduledTrigger {
    /// A fresh, unarmed trigger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one reading has been observed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.last_check.is_some()
    }

    /// Observe the clock at `now` and report whether `target` was reached
    /// since the previous observation.
    pub fn poll(&mut self, now: CalendarTime, target: CalendarTime) -> bool {
        let Some(watermark) = self.last_check else {
            self.last_check = Some(now);
            return false;
        };

        self.last_check = Some(now);

        if now < watermark {
            // Clock went backwards; re-armed above, nothing to match.
            tracing::debug!(%now, %watermark, "clock moved backwards, re-arming trigger");
            return false;
        }

        watermark < target && target <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(second: u8) -> CalendarTime {
        CalendarTime {
            year: 2024,
            month: 3,
            day: 10,
            hour: 12,
            minute: 0,
            second,
        }
    }

    #[test]
    fn should_not_fire_on_first_poll_even_when_target_already_passed() {
        let mut trigger = ScheduledTrigger::new();
        assert!(!trigger.is_armed());
        assert!(!trigger.poll(at(30), at(10)));
        assert!(trigger.is_armed());
    }

    #[test]
    fn should_fire_once_when_target_lies_between_two_polls() {
        let mut trigger = ScheduledTrigger::new();
        assert!(!trigger.poll(at(10), at(15)));
        assert!(trigger.poll(at(20), at(15)));
    }

    #[test]
    fn should_not_refire_on_later_polls() {
        let mut trigger = ScheduledTrigger::new();
        assert!(!trigger.poll(at(10), at(15)));
        assert!(trigger.poll(at(20), at(15)));
        assert!(!trigger.poll(at(20), at(15)));
        assert!(!trigger.poll(at(25), at(15)));
    }

    #[test]
    fn should_fire_when_poll_lands_exactly_on_target() {
        let mut trigger = ScheduledTrigger::new();
        assert!(!trigger.poll(at(10), at(15)));
        assert!(trigger.poll(at(15), at(15)));
    }

    #[test]
    fn should_not_fire_when_target_equals_watermark() {
        let mut trigger = ScheduledTrigger::new();
        assert!(!trigger.poll(at(15), at(15)));
        assert!(!trigger.poll(at(20), at(15)));
    }

    #[test]
    fn should_not_fire_for_target_still_in_the_future() {
        let mut trigger = ScheduledTrigger::new();
        assert!(!trigger.poll(at(10), at(40)));
        assert!(!trigger.poll(at(20), at(40)));
        assert!(!trigger.poll(at(30), at(40)));
        assert!(trigger.poll(at(40), at(40)));
    }

    #[test]
    fn should_rearm_without_firing_when_clock_moves_backwards() {
        let mut trigger = ScheduledTrigger::new();
        assert!(!trigger.poll(at(30), at(25)));
        // Resync to before the target: re-arm, no fire.
        assert!(!trigger.poll(at(10), at(25)));
        // The target is then matched again from the new watermark.
        assert!(trigger.poll(at(28), at(25)));
    }

    #[test]
    fn should_track_retargeting_between_polls() {
        let mut trigger = ScheduledTrigger::new();
        assert!(!trigger.poll(at(10), at(50)));
        // The entity was edited to a closer instant; match against the new
        // target immediately.
        assert!(trigger.poll(at(20), at(15)));
    }

    #[test]
    fn should_match_across_date_boundaries() {
        let mut trigger = ScheduledTrigger::new();
        let before_midnight = CalendarTime {
            year: 2024,
            month: 12,
            day: 31,
            hour: 23,
            minute: 59,
            second: 58,
        };
        let target = CalendarTime {
            year: 2025,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        };
        let after_midnight = CalendarTime {
            year: 2025,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 2,
        };
        assert!(!trigger.poll(before_midnight, target));
        assert!(trigger.poll(after_midnight, target));
    }
}
