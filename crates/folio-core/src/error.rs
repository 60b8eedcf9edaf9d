//! Error types shared by all Folio crates.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for Folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, validating, or rendering content.
///
/// All variants are marked `#[non_exhaustive]` at the enum level so new
/// failure kinds can be added without a breaking change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error tied to a specific file.
    #[error("I/O error at {}: {source}", .path.display())]
    IoWithPath {
        /// File that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Content could not be parsed.
    #[error("Parse error: {message}")]
    Parse {
        /// What failed to parse
        message: String,
    },

    /// A value was well-formed but violated a content rule.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// What went wrong
        message: String,
    },

    /// A selector string could not be understood.
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector {
        /// The selector as given
        selector: String,
        /// Why it was rejected
        reason: String,
    },

    /// A node handle did not refer to a usable node of the document.
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    /// No element matched the container selector.
    #[error("Container not found for selector '{selector}'")]
    ContainerNotFound {
        /// The selector that matched nothing
        selector: String,
    },
}

impl Error {
    /// Creates an I/O error carrying the path that was involved.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid selector error.
    pub fn invalid_selector<S, R>(selector: S, reason: R) -> Self
    where
        S: Into<String>,
        R: Into<String>,
    {
        Error::InvalidSelector {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid node error.
    pub fn invalid_node<S: Into<String>>(message: S) -> Self {
        Error::InvalidNode(message.into())
    }
}
