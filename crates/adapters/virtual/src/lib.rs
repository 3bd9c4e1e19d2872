//! # chronohub-adapter-virtual
//!
//! Adapters behind the `app` port traits:
//!
//! | Adapter | Port | Behaviour |
//! |---------|------|-----------|
//! | [`SystemClock`] | `ClockSource` | Reads the host clock (UTC) |
//! | [`ManualClock`] | `ClockSource` | Settable/steppable, for demos and tests |
//! | [`InMemorySnapshotStore`] | `SnapshotStore` | Volatile bytes |
//! | [`FileSnapshotStore`] | `SnapshotStore` | One record in one file |
//!
//! ## Dependency rule
//!
//! Depends on `chronohub-app` (port traits) and `chronohub-domain` only.

mod clock;
mod error;
mod store;

pub use clock::{ManualClock, SystemClock};
pub use error::StoreError;
pub use store::{FileSnapshotStore, InMemorySnapshotStore};
