//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use planar::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("PLNR_DEBUG__LOG_LEVEL", "trace");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.debug.log_level, "trace");
    std::env::remove_var("PLNR_DEBUG__LOG_LEVEL");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("PLNR_DEBUG__LOG_LEVEL");

    let config = AppConfig::load().unwrap();
    // Values from config/default.toml
    assert_eq!(config.debug.log_level, "info");
    assert_eq!(config.debug.collider_color, [1.0, 0.0, 0.0, 1.0]);
    assert!(!config.debug.show_colliders);
    assert_eq!(config.text.letter_spacing, 0);
}

#[test]
#[serial]
fn test_missing_directory_falls_back_to_defaults() {
    std::env::remove_var("PLNR_DEBUG__LOG_LEVEL");

    let config = AppConfig::load_from("no_such_config_dir").unwrap();
    assert_eq!(config.debug.log_level, "info");
    assert_eq!(config.text.letter_spacing, 0);
}

#[test]
#[serial]
fn test_env_numeric_override() {
    std::env::set_var("PLNR_TEXT__LETTER_SPACING", "3");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.text.letter_spacing, 3);
    std::env::remove_var("PLNR_TEXT__LETTER_SPACING");
}
