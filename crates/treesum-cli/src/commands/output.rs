//! Output rendering: Sorted digest tables

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use serde::{Serialize, Serializer};
use treesum_core::{Digest, DigestMap};

use crate::types::OutputFormat;

/// One row of the rendered table
#[derive(Debug, Serialize)]
pub struct Entry<'a> {
    #[serde(serialize_with = "serialize_lossy")]
    pub path: &'a Path,
    pub digest: &'a Digest,
}

/// Non-UTF-8 paths are rendered the same way as in the TSV table
fn serialize_lossy<S: Serializer>(path: &&Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// Entries ordered lexicographically by the raw path bytes
#[must_use]
pub fn sorted_entries(digests: &DigestMap) -> Vec<Entry<'_>> {
    let mut entries: Vec<Entry<'_>> = digests
        .iter()
        .map(|(path, digest)| Entry { path, digest })
        .collect();
    entries.sort_by(|a, b| {
        a.path
            .as_os_str()
            .as_encoded_bytes()
            .cmp(b.path.as_os_str().as_encoded_bytes())
    });
    entries
}

/// Render `<hex-digest>\t<path>` lines
#[must_use]
pub fn render_tsv(digests: &DigestMap) -> String {
    let mut out = String::new();
    for entry in sorted_entries(digests) {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}\t{}", entry.digest, entry.path.display());
    }
    out
}

/// Render a pretty JSON array of `{ "path", "digest" }` objects
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(digests: &DigestMap) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&sorted_entries(digests))?;
    out.push('\n');
    Ok(out)
}

/// Render the table in the requested format
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render(digests: &DigestMap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Tsv => Ok(render_tsv(digests)),
        OutputFormat::Json => render_json(digests),
    }
}
