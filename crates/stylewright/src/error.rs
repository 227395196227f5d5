//! Error types for building and compiling stylesheets.
//!
//! Copyright (c) 2025 Posit, PBC

use stylewright_runtime::RuntimeError;
use thiserror::Error;

/// Errors that can occur while compiling a built document
#[derive(Debug, Error)]
pub enum StyleError {
    /// An include item has a shape that cannot be turned into text
    #[error("Unsupported include type: {type_name}")]
    UnsupportedIncludeType { type_name: String },

    /// The engine rejected the stylesheet; passed through unchanged
    #[error(transparent)]
    Compilation(RuntimeError),

    /// An include source could not be read
    #[error("Failed to read include {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: RuntimeError,
    },

    /// Compile options could not be parsed
    #[error("Invalid compile options: {message}")]
    InvalidOptions { message: String },
}

impl StyleError {
    pub(crate) fn unsupported(type_name: impl Into<String>) -> Self {
        StyleError::UnsupportedIncludeType {
            type_name: type_name.into(),
        }
    }
}

/// Result type for stylesheet operations.
pub type StyleResult<T> = Result<T, StyleError>;
