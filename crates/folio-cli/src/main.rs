//! Folio CLI
//!
//! Renders a portfolio's project entries into an HTML page.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use folio_cli::cli::{Args, Command};
use folio_cli::{commands, config_handlers, FolioConfig};
use folio_core::ConfigManager;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config_path = args.config.as_deref();
    match args.command {
        Command::Config { action } => {
            config_handlers::handle_config_command(config_path, action)?;
        }
        Command::Render(render) => {
            let config = FolioConfig::load(config_path)?;
            commands::cmd_render(config, render)?;
        }
        Command::List { catalog, json } => {
            let config = FolioConfig::load(config_path)?;
            commands::cmd_list(&config, catalog.as_deref(), json)?;
        }
    }
    Ok(())
}

/// Log to stderr so rendered HTML on stdout stays clean.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
