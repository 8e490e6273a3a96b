//! Digest workers: Read and hash files handed over by the walker

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::activity::{ActivityGauge, ActivityGuard};
use super::handoff::{self, HandoffReceiver, HandoffSender, RecvOutcome, SendOutcome};
use crate::digest::{Algorithm, Digest};
use crate::error::{HashError, Result};

/// Source of file contents for the digest workers
pub trait FileReader: Send + Sync + 'static {
    /// Read the full contents of `path`
    fn read(&self, path: &Path) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send;
}

/// Reads files from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileReader;

impl FileReader for TokioFileReader {
    fn read(&self, path: &Path) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send {
        tokio::fs::read(path.to_path_buf())
    }
}

/// Digest outcome for one path
#[derive(Debug)]
pub struct FileDigest {
    pub path: PathBuf,
    pub outcome: Result<Digest>,
}

/// Read `path` through `reader` and hash its contents.
///
/// # Errors
/// Returns [`HashError::Read`] if the file cannot be read.
pub async fn digest_file<R: FileReader>(
    reader: &R,
    path: &Path,
    algorithm: Algorithm,
) -> Result<Digest> {
    let data = reader
        .read(path)
        .await
        .map_err(|source| HashError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(algorithm.digest(&data))
}

/// Start `workers` digest workers sharing one path source.
///
/// The returned result sink is exhausted only after every worker has
/// exited, because each worker holds its own sender clone.
pub(crate) fn spawn_pool<R: FileReader>(
    workers: usize,
    paths: HandoffReceiver<PathBuf>,
    reader: Arc<R>,
    algorithm: Algorithm,
    cancel: &CancellationToken,
    gauge: &ActivityGauge,
) -> HandoffReceiver<FileDigest> {
    let (results, sink) = handoff::channel(1);

    for id in 0..workers {
        tokio::spawn(digest_worker(
            id,
            paths.clone(),
            results.clone(),
            Arc::clone(&reader),
            algorithm,
            cancel.clone(),
            gauge.enter(),
        ));
    }

    sink
}

async fn digest_worker<R: FileReader>(
    id: usize,
    paths: HandoffReceiver<PathBuf>,
    results: HandoffSender<FileDigest>,
    reader: Arc<R>,
    algorithm: Algorithm,
    cancel: CancellationToken,
    _guard: ActivityGuard,
) {
    let mut processed = 0usize;
    loop {
        let path = match paths.recv(&cancel).await {
            RecvOutcome::Item(path) => path,
            RecvOutcome::Exhausted => {
                debug!("Worker {} done after {} files", id, processed);
                return;
            }
            RecvOutcome::Canceled => {
                debug!("Worker {} canceled while idle", id);
                return;
            }
        };

        let outcome = digest_file(reader.as_ref(), &path, algorithm).await;
        processed += 1;

        if results.send(FileDigest { path, outcome }, &cancel).await == SendOutcome::Canceled {
            debug!("Worker {} canceled, discarding result", id);
            return;
        }
    }
}
