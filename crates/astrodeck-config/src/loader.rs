// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./astrodeck.toml` > `~/.config/astrodeck/astrodeck.toml`
//! > `/etc/astrodeck/astrodeck.toml` with environment variable overrides via
//! the `ASTRODECK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::AstrodeckConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/astrodeck/astrodeck.toml";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "astrodeck.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/astrodeck/astrodeck.toml`
/// 3. `~/.config/astrodeck/astrodeck.toml`
/// 4. `./astrodeck.toml`
/// 5. `ASTRODECK_*` environment variables
pub fn load_config() -> Result<AstrodeckConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<AstrodeckConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AstrodeckConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AstrodeckConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AstrodeckConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(AstrodeckConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("astrodeck").join(LOCAL_CONFIG_FILE))
                .unwrap_or_default(),
        ))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment provider mapping `ASTRODECK_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that keys containing
/// underscores survive: `ASTRODECK_STORAGE_STATE_DIR` must become
/// `storage.state_dir`, not `storage.state.dir`.
fn env_provider() -> Env {
    Env::prefixed("ASTRODECK_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("app_", "app.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("plugins_", "plugins.", 1);
        mapped.into()
    })
}
