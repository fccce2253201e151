//! Integration tests that exercise the config loader against an on-disk
//! fixture file.
//!
//! These complement the unit tests inside config.rs (which all use inline
//! string literals) by verifying that the full read-from-disk path works
//! end-to-end.

use std::path::PathBuf;

use rust_decimal_macros::dec;
use tip_ui::config;

/// Path to the sample config shipped with the test fixtures.
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("presets.toml")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let config = config::load(Some(&fixture_path()))
        .expect("fixture file should load without error");

    assert_eq!(
        config.tip_presets,
        vec![dec!(10), dec!(12.5), dec!(18), dec!(20)]
    );
    assert_eq!(config.currency_symbol, "€");
}

#[test]
fn test_load_fixture_passes_validation() {
    let config = config::load(Some(&fixture_path())).unwrap();

    assert!(config.validate().is_ok());
}

#[test]
fn test_load_nonexistent_file_returns_err() {
    let bad_path = PathBuf::from("/this/path/does/not/exist.toml");

    let result = config::load(Some(&bad_path));

    assert!(result.is_err());
}
