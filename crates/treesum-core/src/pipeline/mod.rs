//! Pipeline module: Walk, digest, collect
//!
//! One walker feeds paths through a handoff to a fixed pool of digest
//! workers, which feed results through a second handoff to the collector.
//! The collector owns the run's cancellation token and releases it on
//! every exit path.

mod activity;
mod collector;
mod digester;
pub(crate) mod handoff;
mod walker;

pub use activity::{ActivityGauge, ActivityGuard};
pub use collector::{DigestMap, TreeHasher, compute_all};
pub use digester::{FileDigest, FileReader, TokioFileReader, digest_file};

#[cfg(test)]
mod tests;
