//! Folio Core: shared errors and configuration traits.
//!
//! This crate provides the foundational types used across all Folio crates.
//! It has no internal Folio dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`traits`]: The [`ConfigManager`] trait for TOML-backed configuration

pub mod error;
pub mod traits;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use traits::ConfigManager;
