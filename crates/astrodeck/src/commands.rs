// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin subcommand implementations.
//!
//! Every command except `new` and `config` starts the host first, so the
//! output reflects the registry after reconciliation and installs.

use std::io::IsTerminal;
use std::path::PathBuf;

use astrodeck_config::AstrodeckConfig;
use astrodeck_core::{AstrodeckError, PluginState};
use astrodeck_plugin::{PluginRecord, scaffold_plugin};

use crate::host::{self, Host};

/// Directory `new` writes into when neither `--dir` nor `plugins.directory` is set.
const DEFAULT_PLUGIN_DIR: &str = "plugins";

/// Output settings shared by all commands.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub color: bool,
}

impl Output {
    pub fn new(json: bool, plain: bool) -> Self {
        Self {
            json,
            color: !plain && std::io::stdout().is_terminal(),
        }
    }
}

/// `astrodeck list`
pub async fn list(config: &AstrodeckConfig, out: Output) -> Result<(), AstrodeckError> {
    let host = host::start(config).await;
    let registry = &host.registry;

    if out.json {
        return print_json(registry.records());
    }

    println!();
    println!("  astrodeck plugins");
    println!("  {}", "-".repeat(60));
    for record in registry.records() {
        let state = registry
            .plugin_state(&record.id)
            .unwrap_or(PluginState::Disabled);
        println!("{}", format_plugin_line(record, state, out.color));
    }
    println!();
    println!(
        "  {} plugins, {} enabled",
        registry.records().len(),
        registry.enabled_plugins().len()
    );
    println!();
    Ok(())
}

/// `astrodeck enable <id>` / `astrodeck disable <id>`
pub async fn set_enabled(
    config: &AstrodeckConfig,
    id: &str,
    enabled: bool,
    out: Output,
) -> Result<(), AstrodeckError> {
    let Host { mut registry, .. } = host::start(config).await;
    if registry.record(id).is_none() {
        return Err(AstrodeckError::PluginNotFound { id: id.to_string() });
    }

    registry.toggle_plugin(id, enabled).await;

    let state = registry.plugin_state(id).unwrap_or(PluginState::Disabled);
    if enabled && state != PluginState::Installed {
        return Err(AstrodeckError::install(
            id,
            "enabled, but the install step did not complete",
        ));
    }

    let path = registry.plugin_path(id).unwrap_or("-");
    let verb = if enabled { "enabled" } else { "disabled" };
    if out.color {
        use colored::Colorize;
        println!("  {} {id} {verb} ({path})", "✓".green());
    } else {
        println!("  [OK] {id} {verb} ({path})");
    }
    Ok(())
}

/// `astrodeck nav`
pub async fn nav(config: &AstrodeckConfig, out: Output) -> Result<(), AstrodeckError> {
    let host = host::start(config).await;
    let items = host.registry.navigation_items();

    if out.json {
        return print_json(items);
    }

    if items.is_empty() {
        println!("  no navigation items (enable a plugin with `astrodeck enable <id>`)");
        return Ok(());
    }
    for item in items {
        println!("  {:<12} {:<24} {}", item.path, item.title, item.icon);
    }
    Ok(())
}

/// `astrodeck routes`
pub async fn routes(config: &AstrodeckConfig, out: Output) -> Result<(), AstrodeckError> {
    let host = host::start(config).await;
    let routes = host.router.routes();

    if out.json {
        return print_json(&routes);
    }

    for route in &routes {
        let guard = if route.meta.requires_setup {
            "requires setup"
        } else {
            ""
        };
        println!("  {:<12} {:<24} {guard}", route.path, route.component);
    }
    Ok(())
}

/// `astrodeck search <query>`
pub fn search(config: &AstrodeckConfig, query: &str, out: Output) -> Result<(), AstrodeckError> {
    let catalog = host::build_catalog(config);
    let matches: Vec<_> = catalog
        .search(query)
        .into_iter()
        .map(|entry| &entry.descriptor)
        .collect();

    if out.json {
        return print_json(&matches);
    }

    if matches.is_empty() {
        println!("  no plugins match '{query}'");
        return Ok(());
    }
    for descriptor in matches {
        println!(
            "  {:<20} {:<8} {}",
            descriptor.id, descriptor.version, descriptor.description
        );
    }
    Ok(())
}

/// `astrodeck new <name>`
pub fn new_plugin(
    config: &AstrodeckConfig,
    name: &str,
    description: &str,
    author: &str,
    dir: Option<PathBuf>,
) -> Result<(), AstrodeckError> {
    let target = dir
        .or_else(|| config.plugins.directory.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PLUGIN_DIR));

    let path = scaffold_plugin(name, description, author, &target)?;
    println!("  created {}", path.display());
    if config.plugins.directory.is_none() {
        println!(
            "  set plugins.directory = \"{}\" to load it",
            target.display()
        );
    }
    Ok(())
}

/// `astrodeck config`: prints the effective configuration as TOML.
pub fn show_config(config: &AstrodeckConfig) -> Result<(), AstrodeckError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| AstrodeckError::Config(format!("cannot render config: {e}")))?;
    print!("{rendered}");
    Ok(())
}

/// One `list` row: state marker, id, version, slot and name.
pub fn format_plugin_line(record: &PluginRecord, state: PluginState, color: bool) -> String {
    let path = record.plugin_path.as_deref().unwrap_or("-");
    let body = format!(
        "{:<20} {:<8} {:<10} {}",
        record.id, record.version, path, record.name
    );

    if color {
        use colored::Colorize;
        let marker = match state {
            PluginState::Installed => "✓".green(),
            PluginState::Pending => "!".yellow(),
            PluginState::Disabled => "-".dimmed(),
        };
        format!("    {marker} {body}")
    } else {
        let marker = match state {
            PluginState::Installed => "[ON]  ",
            PluginState::Pending => "[WAIT]",
            PluginState::Disabled => "[OFF] ",
        };
        format!("    {marker} {body}")
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), AstrodeckError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AstrodeckError::Internal(format!("cannot render JSON: {e}")))?;
    println!("{rendered}");
    Ok(())
}
