//! Errors surfaced by a hashing run

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T, E = HashError> = std::result::Result<T, E>;

/// Errors that can occur while hashing a directory tree
#[derive(Debug, Error)]
pub enum HashError {
    /// Enumerating the tree failed (permission denied, entry vanished, ...)
    #[error("walk failed at {}: {source}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The root exists but is not a directory
    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// A single file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The run was stopped before this unit could hand off its work.
    /// Absorbed during teardown, never returned from `compute_all`.
    #[error("walk canceled")]
    Canceled,

    /// A pipeline task panicked or was aborted
    #[error("pipeline task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl HashError {
    /// Build a traversal error from a walkdir failure, falling back to the
    /// walk root when walkdir does not know the offending path.
    pub(crate) fn traversal(root: &Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
        Self::Traversal { path, source }
    }

    /// True for faults raised while enumerating the tree
    #[must_use]
    pub fn is_traversal(&self) -> bool {
        matches!(self, Self::Traversal { .. } | Self::NotADirectory { .. })
    }

    /// True for per-file read faults
    #[must_use]
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    #[must_use]
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    /// The filesystem path the error refers to, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Traversal { path, .. } | Self::NotADirectory { path } | Self::Read { path, .. } => {
                Some(path.as_path())
            }
            Self::Canceled | Self::Task(_) => None,
        }
    }
}
