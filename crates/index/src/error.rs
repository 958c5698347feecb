//! Error types for the index layer.
//!
//! Errors are split by how the REST layer has to react to them: a query the
//! provider refuses is recoverable (the caller answers with an empty match),
//! while an unreachable or misbehaving provider must surface as a failure.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::time::Duration;

use thiserror::Error;

/// The primary error type for all index operations.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The provider refused this particular query (for example because the
    /// query string exceeds its maximum length).
    #[error("query rejected by {backend}: {message}")]
    QueryRejected {
        backend: &'static str,
        message: String,
    },

    /// The provider did not answer within the configured timeout.
    #[error("{backend} did not respond within {}", humanize(.timeout))]
    Timeout {
        backend: &'static str,
        timeout: Duration,
    },

    /// The provider could not be reached or answered with a server error.
    #[error("{backend} unavailable: {message}")]
    Unavailable {
        backend: &'static str,
        message: String,
    },

    /// The provider answered, but the payload could not be understood.
    #[error("invalid response from {backend}: {message}")]
    InvalidResponse {
        backend: &'static str,
        message: String,
    },

    /// The catalog used to seed a local index could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors raised while loading a catalog file into a local index.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate library name in catalog: {name}")]
    DuplicateName { name: String },

    #[error("failed to index library {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl IndexError {
    /// Returns true when the error concerns only the submitted query and the
    /// provider itself is healthy.
    pub fn is_query_rejection(&self) -> bool {
        matches!(self, IndexError::QueryRejected { .. })
    }
}

fn humanize(timeout: &Duration) -> String {
    format!("{}ms", timeout.as_millis())
}

/// Result type alias for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
