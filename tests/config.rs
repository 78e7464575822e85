use jobtracker::{initialize, Config, TrackerError};
use std::path::PathBuf;

#[test]
fn empty_toml_gives_defaults() {
    let config = Config::from_toml_str("").unwrap();

    assert_eq!(config, Config::default());
    assert!(config.confirm_clear);
    assert!(config.theme_name.is_none());
}

#[test]
fn toml_keys_map_onto_fields() {
    let config = Config::from_toml_str(
        r#"
        data_dir = "/tmp/jobs"
        theme = "catppuccin-latte"
        theme_file = "/tmp/theme.toml"
        trace_level = "debug"
        confirm_clear = false
        "#,
    )
    .unwrap();

    assert_eq!(config.data_dir.as_deref(), Some("/tmp/jobs"));
    assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    assert_eq!(config.theme_file.as_deref(), Some("/tmp/theme.toml"));
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert!(!config.confirm_clear);
}

#[test]
fn malformed_toml_is_a_config_error() {
    assert!(matches!(
        Config::from_toml_str("confirm_clear = \"sometimes\""),
        Err(TrackerError::Config(_))
    ));
    assert!(matches!(
        Config::from_toml_str("theme = "),
        Err(TrackerError::Config(_))
    ));
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "trace_level = \"warn\"\n").unwrap();

    assert_eq!(Config::load(&path).unwrap().trace_level.as_deref(), Some("warn"));
}

#[test]
fn env_overrides_replace_file_values() {
    let config = Config {
        data_dir: Some("/from/file".to_string()),
        theme_name: Some("catppuccin-mocha".to_string()),
        ..Default::default()
    }
    .with_env_overrides(|key| match key {
        "JOBTRACKER_DATA_DIR" => Some("/from/env".to_string()),
        "JOBTRACKER_THEME" => Some("   ".to_string()),
        "JOBTRACKER_LOG" => Some("trace".to_string()),
        _ => None,
    });

    assert_eq!(config.data_dir.as_deref(), Some("/from/env"));
    assert_eq!(config.theme_name.as_deref(), Some("catppuccin-mocha"));
    assert_eq!(config.trace_level.as_deref(), Some("trace"));
}

#[test]
fn explicit_data_dir_is_used_as_is() {
    let config = Config {
        data_dir: Some("/srv/jobs".to_string()),
        ..Default::default()
    };
    assert_eq!(config.resolved_data_dir(), PathBuf::from("/srv/jobs"));
}

#[test]
fn theme_resolution_prefers_file_then_name() {
    let latte = Config {
        theme_name: Some("catppuccin-latte".to_string()),
        ..Default::default()
    };
    assert_eq!(latte.resolve_theme().name, "catppuccin-latte");

    let unknown = Config {
        theme_name: Some("solarized".to_string()),
        ..Default::default()
    };
    assert_eq!(unknown.resolve_theme().name, "catppuccin-mocha");

    let dir = tempfile::tempdir().unwrap();
    let theme_path = dir.path().join("custom.toml");
    let custom = include_str!("../themes/catppuccin-latte.toml")
        .replace("name = \"catppuccin-latte\"", "name = \"custom\"");
    std::fs::write(&theme_path, custom).unwrap();

    let from_file = Config {
        theme_name: Some("catppuccin-latte".to_string()),
        theme_file: Some(theme_path.display().to_string()),
        ..Default::default()
    };
    assert_eq!(from_file.resolve_theme().name, "custom");

    let broken = Config {
        theme_file: Some(dir.path().join("missing.toml").display().to_string()),
        ..Default::default()
    };
    assert_eq!(broken.resolve_theme().name, "catppuccin-mocha");
}

#[test]
fn initialize_opens_store_in_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let config = Config {
        data_dir: Some(data_dir.display().to_string()),
        confirm_clear: false,
        ..Default::default()
    };

    let state = initialize(&config).unwrap();

    assert!(data_dir.is_dir());
    assert!(state.store.is_empty());
    assert!(!state.confirm_clear);
    assert_eq!(state.store.storage().dir(), data_dir.as_path());
}
