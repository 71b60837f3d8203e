//! # Internal error classification
//!
//! [`BackendError`] is a private vocabulary backends use to classify *why*
//! a primitive failed, for their own `tracing` instrumentation. It never
//! appears in a public [`Filesystem`](crate::Filesystem) method signature —
//! every public operation still folds to `bool` or `Option<T>`. Having one
//! shared enum instead of each backend inventing its own ad hoc reason
//! keeps trace output consistent without widening the public contract.

use std::path::PathBuf;

/// Why a backend primitive failed internally.
///
/// Backends construct this value to log a `tracing` event; callers of
/// [`Filesystem`](crate::Filesystem) never see it.
#[derive(Debug, thiserror::Error)]
pub(crate) enum BackendError {
    /// The path does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The operation was denied by the host's access controls.
    #[error("denied: {path}")]
    Denied {
        /// The path that access was denied to.
        path: PathBuf,
    },

    /// Any other host or backend failure.
    #[error("backend error: {0}")]
    Other(String),
}

impl From<std::io::Error> for BackendError {
    fn from(error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => BackendError::NotFound {
                path: PathBuf::new(),
            },
            std::io::ErrorKind::PermissionDenied => BackendError::Denied {
                path: PathBuf::new(),
            },
            _ => BackendError::Other(error.to_string()),
        }
    }
}
