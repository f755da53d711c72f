//! Tests for logging functionality
//!
//! These tests verify that logging initialization works correctly
//! with different configurations.

use fsadot::core::logging::{init_logging, LogFormat};
use std::str::FromStr;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("Pretty").unwrap(), LogFormat::Pretty);
    assert!(LogFormat::from_str("invalid").is_err());
}

#[test]
fn test_init_logging_with_levels() {
    // Only the first call can install the global subscriber; the rest must
    // fail without panicking
    let _ = init_logging(Some("trace"), Some("compact"));
    let _ = init_logging(Some("debug"), Some("compact"));
    let _ = init_logging(Some("warn"), Some("compact"));
    let _ = init_logging(Some("off"), Some("compact"));
}

#[test]
fn test_init_logging_with_formats() {
    let _ = init_logging(Some("info"), Some("pretty"));
    let _ = init_logging(Some("info"), Some("json"));
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}
