// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Astrodeck configuration system.

use astrodeck_config::diagnostic::ConfigError;
use astrodeck_config::model::AstrodeckConfig;
use astrodeck_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[app]
name = "observatory"
log_level = "debug"

[storage]
state_dir = "/tmp/astrodeck-state"
state_key = "plugins-v2"

[plugins]
directory = "/opt/astrodeck/plugins"
builtin = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.name, "observatory");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.storage.state_dir, "/tmp/astrodeck-state");
    assert_eq!(config.storage.state_key, "plugins-v2");
    assert_eq!(
        config.plugins.directory.as_deref(),
        Some("/opt/astrodeck/plugins")
    );
    assert!(!config.plugins.builtin);
}

/// Empty input yields the compiled defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should deserialize");
    let defaults = AstrodeckConfig::default();
    assert_eq!(config.app.name, "astrodeck");
    assert_eq!(config.storage.state_key, "plugin-store");
    assert_eq!(config.storage.state_dir, defaults.storage.state_dir);
    assert!(config.plugins.builtin);
    assert!(config.plugins.directory.is_none());
}

/// An unknown key is reported with a suggestion for the closest valid key.
#[test]
fn unknown_key_gets_suggestion() {
    let toml = r#"
[storage]
stat_key = "x"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "stat_key");
            assert_eq!(suggestion.as_deref(), Some("state_key"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// A wrongly typed value is reported as InvalidType.
#[test]
fn wrong_type_reported() {
    let toml = r#"
[plugins]
builtin = "yes"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject wrong type");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. })),
        "got {errors:?}"
    );
}

/// Semantic validation runs after successful deserialization.
#[test]
fn validation_errors_surface_from_str() {
    let toml = r#"
[app]
log_level = "loud"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(matches!(errors[0], ConfigError::Validation { .. }));
}

/// Environment variables override file values, including underscore keys.
#[test]
fn env_overrides_file_values() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
[storage]
state_key = "from-file"
"#,
        )?;
        jail.set_env("ASTRODECK_STORAGE_STATE_KEY", "from-env");
        jail.set_env("ASTRODECK_PLUGINS_BUILTIN", "false");

        let config = load_and_validate_path(std::path::Path::new("custom.toml"))
            .map_err(|errors| format!("{errors:?}"))?;
        assert_eq!(config.storage.state_key, "from-env");
        assert!(!config.plugins.builtin);
        Ok(())
    });
}

/// A missing config file falls back to defaults.
#[test]
fn missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = load_and_validate_path(&dir.path().join("absent.toml"))
        .expect("missing file should not be an error");
    assert_eq!(config.app.name, "astrodeck");
}
