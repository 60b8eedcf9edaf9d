//! Command-line argument types.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Folio - render a portfolio's project list as HTML
#[derive(Parser, Debug)]
#[command(name = "folio", version)]
#[command(about = "Render portfolio project entries into an HTML page", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the project page
    Render(RenderArgs),
    /// List catalog entries
    List {
        /// Catalog file (defaults to the configured or built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        /// Config operation to perform
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments of `folio render`.
#[derive(clap::Args, Debug, Default)]
pub struct RenderArgs {
    /// Catalog file (defaults to the configured or built-in catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Write HTML here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the container selector
    #[arg(long)]
    pub selector: Option<String>,

    /// Override the entry wrapper class
    #[arg(long)]
    pub entry_class: Option<String>,
}

/// `folio config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. `render.entry_class`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Write a default config file
    Init {
        /// Target file (defaults to the platform config directory)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration as environment variables
    Export {
        /// Format as `--env` flags for `docker run`
        #[arg(long)]
        docker_env: bool,
    },
}
