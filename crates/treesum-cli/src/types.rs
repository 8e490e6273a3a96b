//! Command line types shared between main and library

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use treesum_core::{Algorithm, DEFAULT_CONCURRENCY, HashConfig};

/// Hash every regular file under a directory tree
#[derive(Debug, Parser)]
#[command(name = "treesum")]
#[command(author, version, about = "Bounded-parallel directory tree hashing", long_about = None)]
pub struct Cli {
    /// Directory to hash
    pub root: PathBuf,

    /// Number of files read and hashed concurrently
    #[arg(short = 'j', long, env = "TREESUM_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Digest algorithm (md5 or sha256)
    #[arg(short, long, default_value_t = Algorithm::Md5)]
    pub algorithm: Algorithm,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_links: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Hashing configuration selected by the flags
    #[must_use]
    pub fn hash_config(&self) -> HashConfig {
        HashConfig::new()
            .with_concurrency(self.concurrency)
            .with_algorithm(self.algorithm)
            .with_follow_links(self.follow_links)
    }
}

/// How the digest table is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<hex-digest>\t<path>` per line
    #[default]
    Tsv,
    /// Pretty-printed JSON array of `{ path, digest }`
    Json,
}
