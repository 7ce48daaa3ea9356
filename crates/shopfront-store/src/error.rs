//! # Store Error Type
//!
//! Persistence faults are the only real failure mode in this layer.
//! Store operations themselves never return errors: invalid input
//! degrades to a no-op, a `false`, or a `None` (see shopfront-core's
//! error docs). `StoreError` exists for the snapshot file, whose I/O
//! and serialization can genuinely fail.
//!
//! The snapshot writer swallows these errors (logged at warn level);
//! they surface to callers only through the explicit
//! [`SnapshotFile`](crate::persist::SnapshotFile) API.

use thiserror::Error;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing or deserializing the snapshot document failed.
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
