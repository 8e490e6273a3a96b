//! Digest module: Content hash algorithms and digest values
//!
//! Hashing is a pure function from a file's bytes to a fixed-size digest.
//! The pipeline never looks inside a digest; it only stores and prints it.

mod algorithm;
mod value;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use value::Digest;
