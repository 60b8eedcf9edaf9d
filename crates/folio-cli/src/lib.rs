//! # folio-cli
//!
//! Command-line front end for Folio:
//! - Render the project page to stdout or a file
//! - List catalog entries
//! - Manage the TOML configuration file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

pub use config::FolioConfig;
pub use error::{Error, Result};
