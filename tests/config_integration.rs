//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use isoart::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("ISOART_ART__PIECE", "moire-2");
    std::env::set_var("ISOART_CANVAS__DRAW_WIDTH", "600");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("ISOART_ART__PIECE");
    std::env::remove_var("ISOART_CANVAS__DRAW_WIDTH");

    assert_eq!(config.art.piece, "moire-2");
    assert_eq!(config.canvas.draw_width, 600.0);
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("ISOART_ART__PIECE");
    std::env::remove_var("ISOART_CANVAS__DRAW_WIDTH");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.canvas.margin, 100.0);
    assert_eq!(config.animation.frames, 120);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = std::env::temp_dir().join(format!("isoart_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[art]\npiece = \"linien\"\nseed = \"base\"\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[art]\nseed = \"mine\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.art.piece, "linien");
    assert_eq!(config.art.seed, "mine");
    assert_eq!(config.art.parameter_a, 5.0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_missing_directory_gives_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.art.piece, "iso-cube");
    assert!(config.output.preset.is_none());
}

#[test]
#[serial]
fn test_invalid_value_is_an_error() {
    std::env::set_var("ISOART_ANIMATION__FRAMES", "many");
    let result = AppConfig::load();
    std::env::remove_var("ISOART_ANIMATION__FRAMES");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}
