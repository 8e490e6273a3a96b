//! Configuration for a hashing run

use crate::digest::Algorithm;

/// Number of digest workers used when nothing else is configured
pub const DEFAULT_CONCURRENCY: usize = 20;

/// Configuration for a [`TreeHasher`](crate::TreeHasher)
///
/// The worker count affects throughput and the peak number of open files,
/// never the resulting digest map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashConfig {
    pub concurrency: usize,
    pub algorithm: Algorithm,
    pub follow_links: bool,
}

impl HashConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of digest workers
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the digest algorithm
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Follow symbolic links while walking
    #[must_use]
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Worker count actually started: at least one
    #[must_use]
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            algorithm: Algorithm::default(),
            follow_links: false,
        }
    }
}
