//! File walker: Enumerates the regular files under a root
//!
//! The walk runs on a blocking thread because directory reads are
//! synchronous. Each discovered path is handed to the worker pool one at a
//! time; that handoff is the only point where the walker notices
//! cancellation.

use std::path::{Path, PathBuf};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use walkdir::WalkDir;

use super::activity::ActivityGauge;
use super::handoff::{self, HandoffReceiver, SendOutcome};
use crate::error::{HashError, Result};

/// Terminal status of a walk, reported exactly once when the walker exits
pub type WalkStatus = JoinHandle<Result<()>>;

/// Walk `root`, calling `emit` for every regular file.
///
/// Directories, symlinks (unless `follow_links` resolves them to a regular
/// file) and special files are skipped. The first traversal error aborts
/// the walk. When `emit` reports cancellation the walk stops with
/// [`HashError::Canceled`].
///
/// # Errors
/// Returns [`HashError::Traversal`] if enumeration fails,
/// [`HashError::NotADirectory`] if `root` is not a directory, and
/// [`HashError::Canceled`] if `emit` was canceled.
pub(crate) fn walk_files<F>(root: &Path, follow_links: bool, mut emit: F) -> Result<()>
where
    F: FnMut(PathBuf) -> SendOutcome,
{
    for entry in WalkDir::new(root).follow_links(follow_links) {
        let entry = entry.map_err(|e| HashError::traversal(root, e))?;
        let file_type = entry.file_type();

        if entry.depth() == 0 && !file_type.is_dir() {
            return Err(HashError::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        if !file_type.is_file() {
            continue;
        }

        if emit(entry.into_path()) == SendOutcome::Canceled {
            return Err(HashError::Canceled);
        }
    }
    Ok(())
}

/// Start walking `root` in the background.
///
/// Returns the path source the workers read from and the walk's terminal
/// status. The path source is exhausted once the walk ends for any reason.
///
/// # Panics
/// Panics if called outside a tokio runtime.
pub(crate) fn spawn_walker(
    root: PathBuf,
    follow_links: bool,
    cancel: CancellationToken,
    gauge: &ActivityGauge,
) -> (HandoffReceiver<PathBuf>, WalkStatus) {
    let (paths, source) = handoff::channel(1);
    let guard = gauge.enter();
    let runtime = tokio::runtime::Handle::current();

    let status = tokio::task::spawn_blocking(move || {
        let _guard = guard;
        debug!("Walker started at {}", root.display());

        let mut emitted = 0usize;
        let status = walk_files(&root, follow_links, |path| {
            let outcome = paths.blocking_send(&runtime, path, &cancel);
            if outcome == SendOutcome::Accepted {
                emitted += 1;
            }
            outcome
        });

        match &status {
            Ok(()) => debug!("Walker finished: {} files", emitted),
            Err(e) => debug!("Walker stopped after {} files: {}", emitted, e),
        }
        status
    });

    (source, status)
}
