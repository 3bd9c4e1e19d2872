//! Ordered observer list with deferred removal.
//!
//! Observers are registered at setup time and notified synchronously, in
//! registration order, once per committed value. The list is never mutated
//! while a notification pass is running: an observer that wants to stop
//! listening returns [`Subscription::Cancel`] from its callback and is
//! removed after the pass completes.

use super::value::DateTimeValue;

/// Handle identifying a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Verdict returned by an observer callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subscription {
    /// Stay registered.
    #[default]
    Keep,
    /// Deregister after the current notification pass.
    Cancel,
}

type Callback = Box<dyn FnMut(&DateTimeValue) -> Subscription + Send>;

/// An append-ordered list of state-change callbacks.
#[derive(Default)]
pub struct ObserverList {
    next_id: u64,
    entries: Vec<(ObserverId, Callback)>,
}

impl ObserverList {
    /// Register a callback; it will be invoked after every commit, in
    /// registration order.
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&DateTimeValue) -> Subscription + Send + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a registered callback. Returns whether it was present.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invoke every callback with `value`, then drop the ones that asked to
    /// cancel.
    pub fn notify(&mut self, value: &DateTimeValue) {
        let mut cancelled = Vec::new();
        for (id, callback) in &mut self.entries {
            if callback(value) == Subscription::Cancel {
                cancelled.push(*id);
            }
        }
        for id in cancelled {
            self.unsubscribe(id);
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn value() -> DateTimeValue {
        DateTimeValue::default()
    }

    #[test]
    fn should_notify_observers_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut list = ObserverList::default();
        for tag in ["first", "second", "third"] {
            let seen = Arc::clone(&seen);
            list.subscribe(move |_| {
                seen.lock().unwrap().push(tag);
                Subscription::Keep
            });
        }

        list.notify(&value());
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn should_remove_observer_when_unsubscribed() {
        let count = Arc::new(Mutex::new(0));
        let mut list = ObserverList::default();
        let counter = Arc::clone(&count);
        let id = list.subscribe(move |_| {
            *counter.lock().unwrap() += 1;
            Subscription::Keep
        });

        assert!(list.unsubscribe(id));
        assert!(list.is_empty());
        list.notify(&value());
        assert_eq!(*count.lock().unwrap(), 0);
    }

    #[test]
    fn should_report_absent_observer_on_double_unsubscribe() {
        let mut list = ObserverList::default();
        let id = list.subscribe(|_| Subscription::Keep);
        assert!(list.unsubscribe(id));
        assert!(!list.unsubscribe(id));
    }

    #[test]
    fn should_defer_cancellation_to_after_the_pass() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut list = ObserverList::default();

        let log = Arc::clone(&seen);
        list.subscribe(move |_| {
            log.lock().unwrap().push("one-shot");
            Subscription::Cancel
        });
        let log = Arc::clone(&seen);
        list.subscribe(move |_| {
            log.lock().unwrap().push("steady");
            Subscription::Keep
        });

        // The cancelling observer still sees this pass, and the later
        // observer is not skipped by its removal.
        list.notify(&value());
        assert_eq!(*seen.lock().unwrap(), vec!["one-shot", "steady"]);
        assert_eq!(list.len(), 1);

        list.notify(&value());
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["one-shot", "steady", "steady"]
        );
    }
}
