//! Fallback handler for unknown routes.

use axum::http::Uri;

use crate::error::RestError;

/// Answers any unmatched path with a JSON 404.
pub async fn not_found_handler(uri: Uri) -> RestError {
    RestError::NotFound {
        path: uri.path().to_string(),
    }
}
