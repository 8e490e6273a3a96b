//! treesum-core: Bounded-parallel content hashing of directory trees
//!
//! A single walker enumerates the regular files under a root, a fixed pool
//! of digest workers reads and hashes them, and a collector gathers the
//! results into a map or stops at the first failure. Every run owns one
//! cancellation token that is released on every exit path, so no walker or
//! worker outlives the call.
//!
//! # Example
//!
//! ```no_run
//! # async fn demo() -> Result<(), treesum_core::HashError> {
//! let digests = treesum_core::compute_all("some/dir").await?;
//! for (path, digest) in &digests {
//!     println!("{digest}\t{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod digest;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use config::{DEFAULT_CONCURRENCY, HashConfig};
pub use digest::{Algorithm, Digest};
pub use error::{HashError, Result};
pub use pipeline::{DigestMap, FileReader, TokioFileReader, TreeHasher, compute_all};

#[cfg(test)]
mod tests;
