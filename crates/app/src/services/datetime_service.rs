//! Datetime service — use-cases for editing and persisting the entity.

use chronohub_domain::datetime::{DateTimeCall, DateTimeValue, Snapshot};
use chronohub_domain::error::ChronoHubError;
use chronohub_domain::event::{Event, EventType};
use chronohub_domain::id::EntityId;

use crate::ports::{EventPublisher, SnapshotStore};
use crate::{SharedEntity, lock_entity};

/// Application service around a single shared [`DateTimeEntity`].
///
/// All writes funnel through [`apply`](Self::apply): commits publish a
/// `StateChanged` event on the bus, rejected calls publish nothing and
/// leave the entity untouched.
///
/// [`DateTimeEntity`]: chronohub_domain::datetime::DateTimeEntity
pub struct DateTimeService<P> {
    entity: SharedEntity,
    publisher: P,
}

impl<P: EventPublisher> DateTimeService<P> {
    /// Create a new service over a shared entity.
    pub fn new(entity: SharedEntity, publisher: P) -> Self {
        Self { entity, publisher }
    }

    /// The entity's identifier.
    #[must_use]
    pub fn entity_id(&self) -> EntityId {
        lock_entity(&self.entity).id()
    }

    /// The entity's current value.
    #[must_use]
    pub fn value(&self) -> DateTimeValue {
        lock_entity(&self.entity).value()
    }

    /// Start a transaction with all overrides empty.
    #[must_use]
    pub fn make_call(&self) -> DateTimeCall {
        lock_entity(&self.entity).make_call()
    }

    /// Perform `call` against the entity and publish the state change.
    ///
    /// # Errors
    ///
    /// Returns [`ChronoHubError::Validation`] when the merged value fails
    /// calendar validation; the entity is unchanged and no event is
    /// published.
    pub async fn apply(&self, call: DateTimeCall) -> Result<DateTimeValue, ChronoHubError> {
        let (id, from, to) = {
            let mut entity = lock_entity(&self.entity);
            let from = entity.value();
            let to = call.perform(&mut entity)?;
            (entity.id(), from, to)
        };

        tracing::info!(%from, %to, "datetime updated");
        let event = Event::new(
            EventType::StateChanged,
            Some(id),
            serde_json::json!({
                "from": from.to_string(),
                "to": to.to_string(),
            }),
        );
        // Fire-and-forget: a full bus never blocks a commit.
        let _ = self.publisher.publish(event).await;

        Ok(to)
    }

    /// Restore the entity from the last-saved snapshot, if any.
    ///
    /// Returns whether a snapshot was applied. A missing record, a
    /// wrong-length record, and a calendar-invalid record all leave the
    /// entity at its constructed default and return `Ok(false)` — restore
    /// failures degrade, they never abort boot.
    ///
    /// # Errors
    ///
    /// Propagates [`ChronoHubError::Store`] when the store itself fails.
    pub async fn restore<S: SnapshotStore>(&self, store: &S) -> Result<bool, ChronoHubError> {
        let Some(bytes) = store.load().await? else {
            tracing::debug!("no snapshot to restore");
            return Ok(false);
        };

        let snapshot = match Snapshot::unpack(&bytes) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(%err, "skipping corrupt snapshot");
                return Ok(false);
            }
        };

        let (id, restored) = {
            let mut entity = lock_entity(&self.entity);
            (entity.id(), snapshot.apply_to(&mut entity))
        };
        if !restored {
            return Ok(false);
        }

        tracing::info!(value = %snapshot.value(), "restored datetime from snapshot");
        let event = Event::new(
            EventType::SnapshotRestored,
            Some(id),
            serde_json::json!({"value": snapshot.value().to_string()}),
        );
        let _ = self.publisher.publish(event).await;

        Ok(true)
    }

    /// Pack the current value and persist it.
    ///
    /// # Errors
    ///
    /// Propagates [`ChronoHubError::Store`] when the store fails.
    pub async fn save<S: SnapshotStore>(&self, store: &S) -> Result<(), ChronoHubError> {
        let snapshot = Snapshot::from_value(self.value());
        store.save(&snapshot.pack()).await?;
        tracing::debug!(value = %snapshot.value(), "saved datetime snapshot");
        Ok(())
    }
}
