//! Snapshot store adapters.

use std::future::Future;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use chronohub_app::ports::SnapshotStore;
use chronohub_domain::error::ChronoHubError;

use crate::error::StoreError;

/// Volatile store holding the record in memory. Useful for tests and for
/// running without persistence.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    bytes: Mutex<Option<Vec<u8>>>,
}

impl InMemorySnapshotStore {
    /// An empty store (first boot).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a record.
    #[must_use]
    pub fn with_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: Mutex::new(Some(bytes.to_vec())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<u8>>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> impl Future<Output = Result<Option<Vec<u8>>, ChronoHubError>> + Send {
        let bytes = self.lock().clone();
        async { Ok(bytes) }
    }

    fn save(&self, bytes: &[u8]) -> impl Future<Output = Result<(), ChronoHubError>> + Send {
        *self.lock() = Some(bytes.to_vec());
        async { Ok(()) }
    }
}

/// Stores the record as the entire contents of one file.
///
/// A missing file means "nothing saved yet" and loads as `None`; every
/// save rewrites the file whole. Content-level corruption is not this
/// adapter's concern — the domain rejects records that fail to unpack.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// A store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    async fn load(&self) -> Result<Option<Vec<u8>>, ChronoHubError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot file");
                Ok(None)
            }
            Err(err) => Err(StoreError::Io(err).into()),
        }
    }

    async fn save(&self, bytes: &[u8]) -> Result<(), ChronoHubError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(StoreError::Io)?;
            }
        }
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(StoreError::Io)?;
        tracing::debug!(path = %self.path.display(), len = bytes.len(), "snapshot written");
        Ok(())
    }
}
