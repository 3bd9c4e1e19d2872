//! Event — an immutable record of something that happened.
//!
//! Events are produced by the application layer when a datetime entity
//! commits a new value, when a scheduled trigger fires, or when a snapshot
//! is restored. The domain itself never publishes; it only defines the
//! record shape.

use serde::{Deserialize, Serialize};

use crate::id::{EntityId, EventId};
use crate::time::Timestamp;

/// What kind of occurrence an [`Event`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A datetime entity committed a new value.
    StateChanged,
    /// A scheduled trigger reached its target instant.
    TriggerFired,
    /// A persisted snapshot was applied on boot.
    SnapshotRestored,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StateChanged => f.write_str("state_changed"),
            Self::TriggerFired => f.write_str("trigger_fired"),
            Self::SnapshotRestored => f.write_str("snapshot_restored"),
        }
    }
}

/// An immutable occurrence record with a JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    /// The entity this event concerns, if any.
    pub entity_id: Option<EntityId>,
    /// Type-specific payload (e.g. `{"from": "...", "to": "..."}`).
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create a new event stamped with the current time.
    #[must_use]
    pub fn new(event_type: EventType, entity_id: Option<EntityId>, data: serde_json::Value) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            entity_id,
            data,
            timestamp: crate::time::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_stamp_new_events_with_fresh_id_and_timestamp() {
        let before = crate::time::now();
        let event = Event::new(EventType::StateChanged, None, serde_json::json!({}));
        let after = crate::time::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);

        let other = Event::new(EventType::StateChanged, None, serde_json::json!({}));
        assert_ne!(event.id, other.id);
    }

    #[test]
    fn should_display_event_type_in_snake_case() {
        assert_eq!(EventType::StateChanged.to_string(), "state_changed");
        assert_eq!(EventType::TriggerFired.to_string(), "trigger_fired");
        assert_eq!(EventType::SnapshotRestored.to_string(), "snapshot_restored");
    }

    #[test]
    fn should_roundtrip_event_through_serde_json() {
        let entity_id = EntityId::new();
        let event = Event::new(
            EventType::TriggerFired,
            Some(entity_id),
            serde_json::json!({"at": "2024-01-01 00:00:00"}),
        );
        let json = serde_json::to_string(&event).unwrap();
        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, event.id);
        assert_eq!(parsed.event_type, event.event_type);
        assert_eq!(parsed.entity_id, Some(entity_id));
        assert_eq!(parsed.data, event.data);
    }
}
