// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Astrodeck - plugin host for the observatory control client.
//!
//! This is the binary entry point: it loads configuration, starts the
//! plugin registry and runs one management command.

mod commands;
mod host;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::Output;

/// Astrodeck - manage the plugins of the observatory control client.
#[derive(Parser, Debug)]
#[command(name = "astrodeck", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    /// Print machine-readable JSON where supported.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List every discovered plugin with its state and route slot.
    List,
    /// Enable a plugin and install it.
    Enable {
        /// Plugin id.
        id: String,
    },
    /// Disable a plugin and remove its navigation entry.
    Disable {
        /// Plugin id.
        id: String,
    },
    /// Show the navigation entries of installed plugins.
    Nav,
    /// Show the routes mounted by installed plugins.
    Routes,
    /// Search the plugin catalog by id, name or description.
    Search {
        /// Case-insensitive search text.
        query: String,
    },
    /// Scaffold a new on-disk plugin.
    New {
        /// Display name; the id is derived from it.
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        author: String,
        /// Parent directory (defaults to `plugins.directory`, then `./plugins`).
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => astrodeck_config::load_and_validate_path(path),
        None => astrodeck_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            astrodeck_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    host::init_tracing(&config.app.log_level);

    let out = Output::new(cli.json, cli.plain);
    let result = match cli.command {
        Some(Commands::List) => commands::list(&config, out).await,
        Some(Commands::Enable { id }) => commands::set_enabled(&config, &id, true, out).await,
        Some(Commands::Disable { id }) => commands::set_enabled(&config, &id, false, out).await,
        Some(Commands::Nav) => commands::nav(&config, out).await,
        Some(Commands::Routes) => commands::routes(&config, out).await,
        Some(Commands::Search { query }) => commands::search(&config, &query, out),
        Some(Commands::New {
            name,
            description,
            author,
            dir,
        }) => commands::new_plugin(&config, &name, &description, &author, dir),
        Some(Commands::Config) => commands::show_config(&config),
        None => {
            println!("astrodeck: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("astrodeck: {e}");
        std::process::exit(1);
    }
}
