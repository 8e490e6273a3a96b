//! Shared fixtures for pipeline tests

#![allow(clippy::expect_used)]

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;

use crate::pipeline::{FileReader, TokioFileReader};

/// Write `files` (relative path, content) under a fresh temp dir
pub fn tree(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for (rel, content) in files {
        let path = temp.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }
    temp
}

/// Tree with `count` small files spread over a few directories
pub fn wide_tree(count: usize) -> TempDir {
    let files: Vec<(String, String)> = (0..count)
        .map(|i| (format!("d{}/f{i}.txt", i % 7), format!("content {i}")))
        .collect();
    let refs: Vec<(&str, &str)> = files
        .iter()
        .map(|(p, c)| (p.as_str(), c.as_str()))
        .collect();
    tree(&refs)
}

/// Reader that fails for files with a given name and optionally delays
/// every read
#[derive(Debug, Clone)]
pub struct FaultyReader {
    pub fail_name: Option<&'static str>,
    pub delay: Duration,
}

impl FaultyReader {
    pub fn failing(name: &'static str) -> Self {
        Self {
            fail_name: Some(name),
            delay: Duration::ZERO,
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            fail_name: None,
            delay,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl FileReader for FaultyReader {
    fn read(&self, path: &Path) -> impl Future<Output = io::Result<Vec<u8>>> + Send {
        let path: PathBuf = path.to_path_buf();
        let fail = self
            .fail_name
            .is_some_and(|name| path.file_name().is_some_and(|f| f == name));
        let delay = self.delay;
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if fail {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "injected"));
            }
            TokioFileReader.read(&path).await
        }
    }
}

/// Poll `probe` until it returns zero or `timeout` elapses
pub async fn wait_for_zero(probe: impl Fn() -> usize, timeout: Duration) -> usize {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        let value = probe();
        if value == 0 || tokio::time::Instant::now() >= deadline {
            return value;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
