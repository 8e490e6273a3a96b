//! Hash command: Digest a tree and render the table

use anyhow::{Context, Result};
use tracing::info;
use treesum_core::TreeHasher;

use super::output;
use crate::types::Cli;

/// Run the hash command and return the rendered output
///
/// # Errors
/// Returns an error if the walk or any file read fails. No table is
/// produced in that case.
pub async fn run(cli: &Cli) -> Result<String> {
    let config = cli.hash_config();
    info!(
        "Hashing {} (concurrency: {}, algorithm: {})",
        cli.root.display(),
        config.effective_concurrency(),
        config.algorithm
    );

    let hasher = TreeHasher::new(config);
    let digests = hasher
        .compute_all(&cli.root)
        .await
        .with_context(|| format!("failed to hash {}", cli.root.display()))?;

    info!("✓ {} files hashed", digests.len());
    output::render(&digests, cli.format)
}
