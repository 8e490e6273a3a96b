//! Live pipeline unit accounting

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts the walker and worker units that are still alive
#[derive(Debug, Clone, Default)]
pub struct ActivityGauge {
    live: Arc<AtomicUsize>,
}

impl ActivityGauge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit; it counts as live until the guard is dropped
    #[must_use]
    pub fn enter(&self) -> ActivityGuard {
        self.live.fetch_add(1, Ordering::SeqCst);
        ActivityGuard {
            live: Arc::clone(&self.live),
        }
    }

    /// Number of units currently alive
    #[must_use]
    pub fn active(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

/// Held by a running unit for its whole lifetime
#[derive(Debug)]
pub struct ActivityGuard {
    live: Arc<AtomicUsize>,
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}
