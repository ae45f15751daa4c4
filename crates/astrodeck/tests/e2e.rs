// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests that run the `astrodeck` binary.
//!
//! Each test writes its own config file pointing the state directory into a
//! temp dir, so runs are independent and order-insensitive.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

struct Workspace {
    _tmp: tempfile::TempDir,
    root: PathBuf,
    config: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().to_path_buf();
        let config = root.join("astrodeck.toml");
        std::fs::write(
            &config,
            format!(
                "[app]\nlog_level = \"error\"\n\n[storage]\nstate_dir = \"{}\"\n\n[plugins]\ndirectory = \"{}\"\n",
                root.join("state").display(),
                root.join("plugins").display()
            ),
        )
        .unwrap();
        Self {
            _tmp: tmp,
            root,
            config,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_astrodeck"))
            .arg("--config")
            .arg(&self.config)
            .arg("--plain")
            .args(args)
            .env_remove("RUST_LOG")
            .current_dir(&self.root)
            .output()
            .unwrap()
    }

    fn state_file(&self) -> PathBuf {
        self.root.join("state").join("plugin-store.json")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---- Listing ----

#[test]
fn test_list_shows_builtin_plugins_and_persists() {
    let ws = Workspace::new();
    let output = ws.run(&["list"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("shortcuts"));
    assert!(text.contains("weather-station"));
    assert!(ws.state_file().is_file());
}

#[test]
fn test_list_json_has_unique_slots() {
    let ws = Workspace::new();
    let records = json(&ws.run(&["list", "--json"]));

    let paths: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["pluginPath"].as_str().unwrap())
        .collect();
    let mut unique = paths.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(paths.len(), unique.len());
    assert_eq!(paths[0], "/plugin1");
}

// ---- Enable / disable ----

#[test]
fn test_enable_then_disable_round_trip() {
    let ws = Workspace::new();

    let enabled = ws.run(&["enable", "weather-station"]);
    assert!(enabled.status.success(), "{}", String::from_utf8_lossy(&enabled.stderr));
    assert!(stdout(&enabled).contains("/plugin2"));

    let nav = json(&ws.run(&["nav", "--json"]));
    let ids: Vec<&str> = nav
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["pluginId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["shortcuts", "weather-station"]);

    assert!(ws.run(&["disable", "weather-station"]).status.success());
    let nav = json(&ws.run(&["nav", "--json"]));
    assert_eq!(nav.as_array().unwrap().len(), 1);

    let records = json(&ws.run(&["list", "--json"]));
    let weather = records
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == "weather-station")
        .unwrap();
    assert_eq!(weather["enabled"], false);
    assert_eq!(weather["pluginPath"], "/plugin2");
}

#[test]
fn test_enable_unknown_plugin_fails() {
    let ws = Workspace::new();
    let output = ws.run(&["enable", "no-such-plugin"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no-such-plugin"));
}

// ---- Scaffolding ----

#[test]
fn test_new_plugin_is_discovered() {
    let ws = Workspace::new();
    let created = ws.run(&["new", "Dew Heater", "--description", "Heater bands"]);
    assert!(created.status.success());
    assert!(descriptor_exists(&ws.root.join("plugins"), "dew-heater"));

    let found = stdout(&ws.run(&["search", "heater"]));
    assert!(found.contains("dew-heater"));

    let routes = json(&ws.run(&["routes", "--json"]));
    assert_eq!(routes.as_array().unwrap().len(), 1, "new plugins start disabled");
}

fn descriptor_exists(dir: &Path, id: &str) -> bool {
    dir.join(id).join("plugin.json").is_file()
}

// ---- Configuration ----

#[test]
fn test_invalid_config_exits_nonzero() {
    let ws = Workspace::new();
    std::fs::write(&ws.config, "[storage]\nstate_key = \"\"\n").unwrap();

    let output = ws.run(&["list"]);
    assert!(!output.status.success());
}

#[test]
fn test_config_command_prints_toml() {
    let ws = Workspace::new();
    let text = stdout(&ws.run(&["config"]));
    assert!(text.contains("[storage]"));
    assert!(text.contains("log_level = \"error\""));
}
