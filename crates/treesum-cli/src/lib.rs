//! treesum-cli library
//!
//! This module exposes the internal functionality of treesum-cli for testing purposes.

pub mod commands;
pub mod logging;
pub mod types;

pub use types::{Cli, OutputFormat};
