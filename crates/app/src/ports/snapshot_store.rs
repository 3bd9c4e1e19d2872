//! Snapshot store port — durable bytes across power cycles.

use std::future::Future;

use chronohub_domain::error::ChronoHubError;

/// Holds the last-saved snapshot record.
///
/// The store deals in opaque bytes; packing and validation belong to the
/// domain. First boot (nothing ever saved) is `Ok(None)`, not an error.
pub trait SnapshotStore {
    /// Load the last-saved record, if any.
    fn load(&self) -> impl Future<Output = Result<Option<Vec<u8>>, ChronoHubError>> + Send;

    /// Persist `bytes` as the new record, replacing any previous one.
    fn save(&self, bytes: &[u8]) -> impl Future<Output = Result<(), ChronoHubError>> + Send;
}

impl<T: SnapshotStore + Send + Sync> SnapshotStore for std::sync::Arc<T> {
    fn load(&self) -> impl Future<Output = Result<Option<Vec<u8>>, ChronoHubError>> + Send {
        (**self).load()
    }

    fn save(&self, bytes: &[u8]) -> impl Future<Output = Result<(), ChronoHubError>> + Send {
        (**self).save(bytes)
    }
}
