//! # chronohub-app
//!
//! Application layer for chronohub: port traits (the IO boundaries),
//! the in-process event bus, the datetime use-case service, and the
//! polling trigger scheduler.
//!
//! ## Dependency rule
//! Depends only on `chronohub-domain`. Adapters implement the traits in
//! [`ports`]; this crate never imports an adapter.

pub mod event_bus;
pub mod ports;
pub mod scheduler;
pub mod services;

/// A datetime entity shared between the service (writer) and the scheduler
/// (reader). All access is short, synchronous critical sections on one
/// logical execution context; the mutex exists to satisfy `Send` bounds,
/// not for multi-writer arbitration.
pub type SharedEntity = std::sync::Arc<std::sync::Mutex<chronohub_domain::datetime::DateTimeEntity>>;

/// Wrap an entity for sharing.
#[must_use]
pub fn share_entity(entity: chronohub_domain::datetime::DateTimeEntity) -> SharedEntity {
    std::sync::Arc::new(std::sync::Mutex::new(entity))
}

/// Lock a shared entity. Poisoning is recovered: the entity's value is
/// either the old or the new committed one, never partial.
pub(crate) fn lock_entity(
    entity: &SharedEntity,
) -> std::sync::MutexGuard<'_, chronohub_domain::datetime::DateTimeEntity> {
    entity
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
