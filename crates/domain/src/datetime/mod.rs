//! The datetime entity — a settable wall-clock date/time value.
//!
//! A [`DateTimeEntity`] owns exactly one valid [`DateTimeValue`] at all
//! times. Edits go through a [`DateTimeCall`]: callers set only the fields
//! they care about, and `perform` merges the sparse overrides with the
//! current value, validates the result against calendar rules, and commits
//! it atomically with a single observer notification. A
//! [`ScheduledTrigger`] polls a clock and fires once when the stored
//! instant is reached, and a [`Snapshot`] carries the value across power
//! cycles as a packed 7-byte record.

mod call;
mod entity;
mod observer;
mod snapshot;
mod trigger;
mod value;

pub use call::DateTimeCall;
pub use entity::{AsCalendarTime, DateTimeEntity};
pub use observer::{ObserverId, ObserverList, Subscription};
pub use snapshot::{Snapshot, SNAPSHOT_LEN};
pub use trigger::ScheduledTrigger;
pub use value::DateTimeValue;
