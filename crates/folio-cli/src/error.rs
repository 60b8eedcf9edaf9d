//! Error types for folio-cli

use thiserror::Error;

/// Result type alias for folio-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the Folio libraries
    #[error(transparent)]
    Core(#[from] folio_core::Error),

    /// Writing output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
