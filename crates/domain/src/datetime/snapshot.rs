//! Packed snapshot — the durable representation of a datetime value.

use crate::error::SnapshotError;

use super::call::DateTimeCall;
use super::entity::DateTimeEntity;
use super::value::DateTimeValue;

/// Exact length of a packed snapshot record.
pub const SNAPSHOT_LEN: usize = 7;

/// A fixed-layout byte record of the six datetime fields.
///
/// Layout, no padding: `year` as little-endian `u16`, then `month`, `day`,
/// `hour`, `minute`, `second` as one byte each. Unpacking checks only the
/// record length; calendar validity is deliberately left to the restore
/// path, which feeds the fields through the same transaction validation as
/// any other write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    value: DateTimeValue,
}

impl Snapshot {
    /// Capture a snapshot of `value`.
    #[must_use]
    pub fn from_value(value: DateTimeValue) -> Self {
        Self { value }
    }

    /// The raw recorded fields. Not guaranteed to be calendar-valid when
    /// the snapshot came from [`unpack`](Self::unpack).
    #[must_use]
    pub fn value(&self) -> DateTimeValue {
        self.value
    }

    /// Serialize to the packed 7-byte layout.
    #[must_use]
    pub fn pack(&self) -> [u8; SNAPSHOT_LEN] {
        let [year_lo, year_hi] = self.value.year.to_le_bytes();
        [
            year_lo,
            year_hi,
            self.value.month,
            self.value.day,
            self.value.hour,
            self.value.minute,
            self.value.second,
        ]
    }

    /// Deserialize from the packed layout.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::WrongLength`] unless `bytes` is exactly
    /// [`SNAPSHOT_LEN`] long.
    pub fn unpack(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let [year_lo, year_hi, month, day, hour, minute, second] = bytes else {
            return Err(SnapshotError::WrongLength {
                expected: SNAPSHOT_LEN,
                actual: bytes.len(),
            });
        };
        Ok(Self {
            value: DateTimeValue {
                year: u16::from_le_bytes([*year_lo, *year_hi]),
                month: *month,
                day: *day,
                hour: *hour,
                minute: *minute,
                second: *second,
            },
        })
    }

    /// Build a transaction carrying all six recorded fields, so a restore
    /// shares the normal merge-validate-commit path.
    #[must_use]
    pub fn to_call(&self, entity: &DateTimeEntity) -> DateTimeCall {
        entity.make_call().with_value(self.value)
    }

    /// Restore this snapshot into `entity` through the transaction path.
    ///
    /// A calendar-invalid record (corrupted storage) is discarded: the
    /// entity keeps its prior value and the return is `false`.
    pub fn apply_to(&self, entity: &mut DateTimeEntity) -> bool {
        match self.to_call(entity).perform(entity) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(entity = %entity.name(), %err, "discarding invalid snapshot");
                false
            }
        }
    }
}
