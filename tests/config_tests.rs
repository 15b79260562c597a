//! Integration tests for configuration management

use music_graph::config::{Config, ConfigOverrides};
use music_graph::models::SearchOrder;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("nested").join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.networks_dir.is_empty(),
        "Default networks_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.search_order(), SearchOrder::BreadthFirst);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
networks_dir = "./networks"
reports_dir = "./reports"

[search]
order = "dfs"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.networks_dir, "./networks");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.search_order(), SearchOrder::DepthFirst);
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.networks_dir, "");
    assert_eq!(config.search.order, "");
    assert_eq!(config.search_order(), SearchOrder::BreadthFirst);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$MUSIC_GRAPH/test.log"

[paths]
networks_dir = "$MUSIC_GRAPH/networks"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("musicgraph"));
    assert!(!config.logging.file.contains("$MUSIC_GRAPH"));
    assert!(config.paths.networks_dir.ends_with("networks"));
    assert!(!config.paths.networks_dir.contains("$MUSIC_GRAPH"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config
        .set("networks-dir", "/srv/networks")
        .expect("Failed to set networks dir");
    assert_eq!(config.get("networks_dir").unwrap(), "/srv/networks");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("order", "dfs").expect("Failed to set order");
    config.set("level", "error").expect("Failed to set level");
    config
        .unset("order", &defaults)
        .expect("Failed to unset order");
    config
        .unset("level", &defaults)
        .expect("Failed to unset level");

    assert_eq!(config.search.order, defaults.search.order);
    assert_eq!(config.logging.level, defaults.logging.level);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("order", "dfs").expect("Failed to set order");
    config.save_to(&config_file).expect("Failed to save config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded, config);
}

#[test]
fn test_load_creates_missing_file() {
    let (_temp_dir, config_file) = setup_temp_config();
    assert!(!config_file.exists());

    let loaded = Config::load_from(&config_file);

    assert!(config_file.exists());
    assert_eq!(loaded, Config::from_defaults());
}

#[test]
fn test_load_fills_new_fields_and_saves() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "[logging]\nlevel = \"warn\"\n").unwrap();

    let loaded = Config::load_from(&config_file);

    assert_eq!(loaded.logging.level, "warn");
    assert_eq!(loaded.search.order, Config::from_defaults().search.order);
    let saved = fs::read_to_string(&config_file).unwrap();
    assert!(saved.contains("[search]"));
}

#[test]
fn test_cleared_log_file_stays_cleared() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::load_from(&config_file);
    config.set("file", "").expect("Failed to clear file");
    config.save_to(&config_file).expect("Failed to save config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.get("file").unwrap(), "");
    let saved = fs::read_to_string(&config_file).unwrap();
    assert!(saved.contains("file = \"\""));
}

#[test]
fn test_load_without_logging_table_keeps_user_sections() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(
        &config_file,
        "[paths]\nnetworks_dir = \"/srv/networks\"\n\n[search]\norder = \"dfs\"\n",
    )
    .unwrap();

    let loaded = Config::load_from(&config_file);

    assert_eq!(loaded.paths.networks_dir, "/srv/networks");
    assert_eq!(loaded.search_order(), SearchOrder::DepthFirst);
    assert_eq!(loaded.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_load_falls_back_on_invalid_file() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "this is not = = toml").unwrap();

    assert_eq!(Config::load_from(&config_file), Config::from_defaults());
}

#[test]
fn test_reset_at_removes_file() {
    let (_temp_dir, config_file) = setup_temp_config();
    Config::from_defaults()
        .save_to(&config_file)
        .expect("Failed to save config");

    Config::reset_at(&config_file).expect("Failed to reset");
    assert!(!config_file.exists());
    Config::reset_at(&config_file).expect("Reset of a missing file should succeed");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        networks_dir: Some("./custom_networks".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
        search_order: Some("dfs".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.networks_dir, "./custom_networks");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
    assert_eq!(config.search_order(), SearchOrder::DepthFirst);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths, before.paths);
    assert_eq!(config.search, before.search);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[search]"));
    assert!(display_str.contains("networks_dir"));
    assert!(display_str.contains("order"));
}
