//! Store error model.

use std::path::PathBuf;

use thiserror::Error;

/// Snapshot persistence error.
///
/// These are **infrastructure errors** (files, parsing), kept apart from
/// `DomainError`. The caller decides what is fatal: the demonstration flow
/// absorbs `NotFound` and lets the other classes terminate the run.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file does not exist.
    #[error("inventory file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The snapshot file exists but does not parse as an inventory mapping.
    #[error("malformed inventory file {}: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other read/write failure (permissions, disk full, ...).
    #[error("inventory io failure on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
