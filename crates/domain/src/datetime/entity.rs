//! The datetime entity — single owner of the current calendar value.

use crate::id::EntityId;
use crate::time::CalendarTime;

use super::call::DateTimeCall;
use super::observer::{ObserverId, ObserverList, Subscription};
use super::value::DateTimeValue;

/// Capability of expressing current state as a calendar-time reading.
///
/// The scheduled trigger depends only on this, not on a concrete entity
/// type, so any state holder that can decompose itself into the six
/// calendar fields can be watched.
pub trait AsCalendarTime {
    /// The current state as a calendar-time reading.
    fn as_calendar_time(&self) -> CalendarTime;
}

/// A settable wall-clock date/time entity.
///
/// The entity always holds exactly one *valid* [`DateTimeValue`]; the only
/// mutation path is a committing [`DateTimeCall`], which validates the
/// merged value before it is adopted. Every successful commit notifies the
/// observer list exactly once.
type ControlHook = Box<dyn FnMut(&DateTimeValue) + Send>;

pub struct DateTimeEntity {
    id: EntityId,
    name: String,
    value: DateTimeValue,
    /// Variant-specific adoption side effect (e.g. writing an RTC
    /// peripheral), run on commit before observers are notified.
    control: Option<ControlHook>,
    observers: ObserverList,
}

impl DateTimeEntity {
    /// Create an entity holding the epoch default value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            value: DateTimeValue::default(),
            control: None,
            observers: ObserverList::default(),
        }
    }

    /// This entity's identifier.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value. Always valid.
    #[must_use]
    pub fn value(&self) -> DateTimeValue {
        self.value
    }

    /// Start a transaction against this entity, with all overrides empty.
    #[must_use]
    pub fn make_call(&self) -> DateTimeCall {
        DateTimeCall::default()
    }

    /// Register a state-change observer. Callbacks run synchronously on
    /// every commit, in registration order; returning
    /// [`Subscription::Cancel`] deregisters after the current pass.
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&DateTimeValue) -> Subscription + Send + 'static,
    {
        self.observers.subscribe(callback)
    }

    /// Remove a registered observer. Returns whether it was present.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Install the variant-specific adoption side effect, replacing any
    /// previous hook.
    pub fn set_control<F>(&mut self, hook: F)
    where
        F: FnMut(&DateTimeValue) + Send + 'static,
    {
        self.control = Some(Box::new(hook));
    }

    /// Invoke every registered observer with the current value.
    pub fn notify_changed(&mut self) {
        self.observers.notify(&self.value);
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Commit entry point used by a performing call. `value` must already
    /// have passed validation; adoption and notification are one atomic
    /// step as far as observers are concerned.
    pub(super) fn apply_merged(&mut self, value: DateTimeValue) {
        self.value = value;
        if let Some(control) = &mut self.control {
            control(&self.value);
        }
        tracing::debug!(entity = %self.name, value = %self.value, "datetime committed");
        self.notify_changed();
    }
}

impl AsCalendarTime for DateTimeEntity {
    fn as_calendar_time(&self) -> CalendarTime {
        self.value.into()
    }
}

impl std::fmt::Debug for DateTimeEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateTimeEntity")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("value", &self.value)
            .field("control", &self.control.is_some())
            .field("observers", &self.observers)
            .finish()
    }
}
