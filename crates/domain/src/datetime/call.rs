//! The datetime transaction — sparse field overrides committed atomically.

use crate::error::ValidationError;

use super::entity::DateTimeEntity;
use super::value::DateTimeValue;

/// A partial-update transaction against a [`DateTimeEntity`].
///
/// Each field override is an independent option; setters never validate.
/// Validation happens once, at [`perform`](Self::perform) time, against the
/// value obtained by merging the overrides over the entity's current state.
/// A rejected merge leaves the entity untouched and fires no notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimeCall {
    year: Option<u16>,
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
}

impl DateTimeCall {
    /// A call with no overrides set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn with_month(mut self, month: u8) -> Self {
        self.month = Some(month);
        self
    }

    #[must_use]
    pub fn with_day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    #[must_use]
    pub fn with_hour(mut self, hour: u8) -> Self {
        self.hour = Some(hour);
        self
    }

    #[must_use]
    pub fn with_minute(mut self, minute: u8) -> Self {
        self.minute = Some(minute);
        self
    }

    #[must_use]
    pub fn with_second(mut self, second: u8) -> Self {
        self.second = Some(second);
        self
    }

    /// Populate all six overrides from `value`.
    #[must_use]
    pub fn with_value(self, value: DateTimeValue) -> Self {
        self.with_year(value.year)
            .with_month(value.month)
            .with_day(value.day)
            .with_hour(value.hour)
            .with_minute(value.minute)
            .with_second(value.second)
    }

    /// Populate all six overrides from `YYYY-MM-DD HH:MM:SS` text.
    ///
    /// Malformed text populates nothing: the call is returned unchanged and
    /// a warning is logged. Callers that need to distinguish can inspect the
    /// getters or [`is_empty`](Self::is_empty) afterwards.
    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        match text.parse::<DateTimeValue>() {
            Ok(value) => self.with_value(value),
            Err(err) => {
                tracing::warn!(input = text, %err, "ignoring malformed datetime text");
                self
            }
        }
    }

    #[must_use]
    pub fn year(&self) -> Option<u16> {
        self.year
    }

    #[must_use]
    pub fn month(&self) -> Option<u8> {
        self.month
    }

    #[must_use]
    pub fn day(&self) -> Option<u8> {
        self.day
    }

    #[must_use]
    pub fn hour(&self) -> Option<u8> {
        self.hour
    }

    #[must_use]
    pub fn minute(&self) -> Option<u8> {
        self.minute
    }

    #[must_use]
    pub fn second(&self) -> Option<u8> {
        self.second
    }

    /// Whether no override has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.month.is_none()
            && self.day.is_none()
            && self.hour.is_none()
            && self.minute.is_none()
            && self.second.is_none()
    }

    /// The pure merge: override where present, `current` elsewhere.
    #[must_use]
    pub fn merge(&self, current: DateTimeValue) -> DateTimeValue {
        DateTimeValue {
            year: self.year.unwrap_or(current.year),
            month: self.month.unwrap_or(current.month),
            day: self.day.unwrap_or(current.day),
            hour: self.hour.unwrap_or(current.hour),
            minute: self.minute.unwrap_or(current.minute),
            second: self.second.unwrap_or(current.second),
        }
    }

    /// Merge, validate, and commit to `entity`.
    ///
    /// On success the merged value becomes the entity's current value and
    /// observers are notified exactly once; the committed value is
    /// returned. On failure nothing changes and nothing is notified —
    /// dropping the returned `Result` reproduces the reject-don't-crash
    /// behavior expected of user-supplied input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the merged value fails calendar
    /// validation.
    pub fn perform(self, entity: &mut DateTimeEntity) -> Result<DateTimeValue, ValidationError> {
        let merged = self.merge(entity.value());
        if let Err(err) = merged.validate() {
            tracing::warn!(entity = %entity.name(), value = %merged, %err, "rejecting datetime call");
            return Err(err);
        }
        entity.apply_merged(merged);
        Ok(merged)
    }
}
