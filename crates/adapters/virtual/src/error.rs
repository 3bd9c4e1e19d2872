//! Adapter error types.

use chronohub_domain::error::ChronoHubError;

/// Errors specific to the snapshot store adapters.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// File read or write failed.
    #[error("snapshot file IO failed")]
    Io(#[from] std::io::Error),
}

impl From<StoreError> for ChronoHubError {
    fn from(err: StoreError) -> Self {
        ChronoHubError::Store(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_io_error() {
        let err = StoreError::Io(std::io::Error::other("disk on fire"));
        assert_eq!(err.to_string(), "snapshot file IO failed");
    }

    #[test]
    fn should_convert_into_domain_store_error() {
        let err: ChronoHubError = StoreError::Io(std::io::Error::other("nope")).into();
        assert!(matches!(err, ChronoHubError::Store(_)));
    }
}
