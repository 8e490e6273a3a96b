//! Tests for hashing configuration

use crate::config::{DEFAULT_CONCURRENCY, HashConfig};
use crate::digest::Algorithm;

#[test]
fn test_default_config() {
    let config = HashConfig::default();

    assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
    assert_eq!(config.algorithm, Algorithm::Md5);
    assert!(!config.follow_links);
    assert_eq!(HashConfig::new(), config);
}

#[test]
fn test_config_builder() {
    let config = HashConfig::new()
        .with_concurrency(5)
        .with_algorithm(Algorithm::Sha256)
        .with_follow_links(true);

    assert_eq!(config.concurrency, 5);
    assert_eq!(config.algorithm, Algorithm::Sha256);
    assert!(config.follow_links);
}

#[test]
fn test_effective_concurrency_is_at_least_one() {
    assert_eq!(HashConfig::new().with_concurrency(0).effective_concurrency(), 1);
    assert_eq!(HashConfig::new().with_concurrency(1).effective_concurrency(), 1);
    assert_eq!(HashConfig::new().with_concurrency(50).effective_concurrency(), 50);
}
