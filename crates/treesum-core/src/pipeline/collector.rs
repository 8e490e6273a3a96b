//! Collector: Drives one hashing run and gathers its results

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::activity::ActivityGauge;
use super::digester::{FileDigest, FileReader, TokioFileReader, spawn_pool};
use super::handoff::RecvOutcome;
use super::walker::spawn_walker;
use crate::config::HashConfig;
use crate::digest::Digest;
use crate::error::Result;

/// Digest of every regular file found, keyed by path
pub type DigestMap = HashMap<PathBuf, Digest>;

/// Hash every regular file under `root` with the default configuration.
///
/// # Errors
/// Returns the first traversal or read error encountered.
pub async fn compute_all(root: impl AsRef<Path>) -> Result<DigestMap> {
    TreeHasher::default().compute_all(root).await
}

/// Hashes directory trees with a fixed-size worker pool
#[derive(Debug)]
pub struct TreeHasher<R = TokioFileReader> {
    config: HashConfig,
    reader: Arc<R>,
    gauge: ActivityGauge,
}

impl TreeHasher {
    /// Create a hasher that reads from the local filesystem
    #[must_use]
    pub fn new(config: HashConfig) -> Self {
        Self::with_reader(config, TokioFileReader)
    }
}

impl Default for TreeHasher {
    fn default() -> Self {
        Self::new(HashConfig::default())
    }
}

impl<R: FileReader> TreeHasher<R> {
    /// Create a hasher with a custom content source
    #[must_use]
    pub fn with_reader(config: HashConfig, reader: R) -> Self {
        Self {
            config,
            reader: Arc::new(reader),
            gauge: ActivityGauge::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Walker and worker units started by this hasher that are still alive
    #[must_use]
    pub fn active_units(&self) -> usize {
        self.gauge.active()
    }

    /// Hash every regular file under `root`.
    ///
    /// Returns either the complete map or the first error observed, never
    /// both. The run's cancellation token is released on every exit path,
    /// which unblocks any walker or worker still waiting on a handoff.
    ///
    /// # Errors
    /// Returns [`HashError::Read`](crate::HashError::Read) for the first
    /// unreadable file seen, or the walk's error if enumeration failed.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub async fn compute_all(&self, root: impl AsRef<Path>) -> Result<DigestMap> {
        let root = root.as_ref();
        let workers = self.config.effective_concurrency();
        info!(
            "Hashing {} with {} workers ({})",
            root.display(),
            workers,
            self.config.algorithm
        );

        let cancel = CancellationToken::new();
        let _release = cancel.clone().drop_guard();

        let (paths, walk) = spawn_walker(
            root.to_path_buf(),
            self.config.follow_links,
            cancel.clone(),
            &self.gauge,
        );
        let results = spawn_pool(
            workers,
            paths,
            Arc::clone(&self.reader),
            self.config.algorithm,
            &cancel,
            &self.gauge,
        );

        let mut digests = DigestMap::new();
        while let RecvOutcome::Item(FileDigest { path, outcome }) = results.recv(&cancel).await {
            match outcome {
                Ok(digest) => {
                    digests.insert(path, digest);
                }
                Err(e) => {
                    warn!("Stopping run: {}", e);
                    return Err(e);
                }
            }
        }
        debug!("Result sink drained: {} digests", digests.len());

        if let Err(e) = walk.await? {
            warn!("Walk failed: {}", e);
            return Err(e);
        }

        info!("✓ Hashed {} files under {}", digests.len(), root.display());
        Ok(digests)
    }
}
