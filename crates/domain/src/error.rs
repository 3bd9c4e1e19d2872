//! Common error types used across the workspace.
//!
//! Every layer defines typed errors and converts via `#[from]`; no failure
//! here is fatal — rejected writes and corrupt snapshots all degrade to
//! "no state change" at the call site.

/// Umbrella error for the chronohub workspace.
#[derive(Debug, thiserror::Error)]
pub enum ChronoHubError {
    /// A merged datetime value failed calendar validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A persisted snapshot record could not be decoded.
    #[error("snapshot error")]
    Snapshot(#[from] SnapshotError),

    /// An adapter-level storage failure (file IO and the like).
    #[error("storage error")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Why a datetime value (or datetime text) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Month outside 1–12.
    #[error("month {0} out of range 1-12")]
    MonthOutOfRange(u8),

    /// Day does not exist in the given month and year.
    #[error("day {day} out of range for {year:04}-{month:02}")]
    DayOutOfMonth {
        /// Calendar year (leap rules apply).
        year: u16,
        /// Month the day was checked against.
        month: u8,
        /// The rejected day of month.
        day: u8,
    },

    /// Hour outside 0–23.
    #[error("hour {0} out of range 0-23")]
    HourOutOfRange(u8),

    /// Minute outside 0–59.
    #[error("minute {0} out of range 0-59")]
    MinuteOutOfRange(u8),

    /// Second outside 0–59.
    #[error("second {0} out of range 0-59")]
    SecondOutOfRange(u8),

    /// Datetime text did not match `YYYY-MM-DD HH:MM:SS`.
    #[error("malformed datetime text {input:?}, expected `YYYY-MM-DD HH:MM:SS`")]
    MalformedText {
        /// The rejected input.
        input: String,
    },
}

/// Why a persisted snapshot record could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// The record length does not match the packed layout exactly.
    #[error("snapshot record must be {expected} bytes, got {actual}")]
    WrongLength {
        /// Required record length.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_day_out_of_month_with_context() {
        let err = ValidationError::DayOutOfMonth {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "day 29 out of range for 2023-02");
    }

    #[test]
    fn should_display_field_range_errors() {
        assert_eq!(
            ValidationError::MonthOutOfRange(13).to_string(),
            "month 13 out of range 1-12"
        );
        assert_eq!(
            ValidationError::HourOutOfRange(24).to_string(),
            "hour 24 out of range 0-23"
        );
        assert_eq!(
            ValidationError::MinuteOutOfRange(60).to_string(),
            "minute 60 out of range 0-59"
        );
        assert_eq!(
            ValidationError::SecondOutOfRange(60).to_string(),
            "second 60 out of range 0-59"
        );
    }

    #[test]
    fn should_display_wrong_length_snapshot_error() {
        let err = SnapshotError::WrongLength {
            expected: 7,
            actual: 6,
        };
        assert_eq!(err.to_string(), "snapshot record must be 7 bytes, got 6");
    }

    #[test]
    fn should_convert_validation_error_into_umbrella() {
        let err: ChronoHubError = ValidationError::MonthOutOfRange(0).into();
        assert!(matches!(err, ChronoHubError::Validation(_)));
    }

    #[test]
    fn should_convert_snapshot_error_into_umbrella() {
        let err: ChronoHubError = SnapshotError::WrongLength {
            expected: 7,
            actual: 8,
        }
        .into();
        assert!(matches!(err, ChronoHubError::Snapshot(_)));
    }
}
