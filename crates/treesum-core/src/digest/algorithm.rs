//! Supported digest algorithms

use std::str::FromStr;

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use thiserror::Error;

use super::Digest;

/// Returned when parsing an algorithm name fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown digest algorithm: {0} (expected md5 or sha256)")]
pub struct UnknownAlgorithm(pub String);

/// Hash function applied to each file's full contents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Md5,
    Sha256,
}

impl Algorithm {
    /// All supported algorithms
    pub const ALL: [Self; 2] = [Self::Md5, Self::Sha256];

    /// Hash a complete byte buffer
    #[must_use]
    pub fn digest(self, data: &[u8]) -> Digest {
        match self {
            Self::Md5 => Digest::from(Md5::digest(data).as_slice()),
            Self::Sha256 => Digest::from(Sha256::digest(data).as_slice()),
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha256 => 32,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
