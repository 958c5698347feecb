//! Error types for the library catalog API.
//!
//! This module defines the error type returned by handlers, with automatic
//! conversion to JSON error responses.
//!
//! # Error Mapping
//!
//! Index errors from the provider layer are mapped to HTTP status codes:
//!
//! | Index Error | HTTP Status |
//! |-------------|-------------|
//! | QueryRejected | 502 (the libraries handler answers an empty result instead) |
//! | Timeout | 504 |
//! | Unavailable | 502 |
//! | InvalidResponse | 502 |
//! | Catalog | 500 |
//!
//! Error bodies have the shape `{"error": true, "status": <code>, "message": <text>}`
//! and are never cached.

use std::time::Duration;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use cdnjs_index::IndexError;
use serde_json::json;
use thiserror::Error;

/// The primary error type for REST API operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// No route matches the request path (HTTP 404).
    #[error("Not found: {path}")]
    NotFound {
        /// The requested path.
        path: String,
    },

    /// The index did not answer in time (HTTP 504).
    #[error("Search index {backend} timed out after {}ms", .timeout.as_millis())]
    GatewayTimeout {
        /// Name of the index backend.
        backend: &'static str,
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// The index could not be reached or answered badly (HTTP 502).
    #[error("Search index unavailable: {message}")]
    BadGateway {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    #[error("Internal error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::GatewayTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            RestError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = error_body(status, &self.to_string());

        let mut response = (status, Json(body)).into_response();
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        response
    }
}

/// Creates the JSON body of an error response.
pub fn error_body(status: StatusCode, message: &str) -> serde_json::Value {
    json!({
        "error": true,
        "status": status.as_u16(),
        "message": message
    })
}

impl From<IndexError> for RestError {
    fn from(err: IndexError) -> Self {
        match err {
            IndexError::Timeout { backend, timeout } => {
                RestError::GatewayTimeout { backend, timeout }
            }
            e @ (IndexError::QueryRejected { .. }
            | IndexError::Unavailable { .. }
            | IndexError::InvalidResponse { .. }) => {
                RestError::BadGateway {
                    message: e.to_string(),
                }
            }
            IndexError::Catalog(e) => RestError::InternalError {
                message: e.to_string(),
            },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
