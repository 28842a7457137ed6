//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur while rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A node needs a collaborator that was never configured.
    #[error("no {0} handler configured")]
    MissingHandler(&'static str),

    /// A configured collaborator failed.
    #[error("{handler} handler failed: {message}")]
    Handler {
        handler: &'static str,
        message: String,
    },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Invalid tree: {0}")]
    InvalidTree(String),
}

pub type Result<T> = std::result::Result<T, Error>;
