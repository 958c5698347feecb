//! Format-aware response building.
//!
//! Serializes a [`LibraryEnvelope`] as JSON or as the human-readable HTML
//! page, depending on the `output` parameter. Both carry the same cache
//! directive.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::{CatalogHeaders, LibraryEnvelope, render_human};
use crate::error::RestResult;
use crate::extractors::OutputFormat;

/// Builds the HTTP response for an envelope in the requested format.
pub fn format_envelope_response(
    envelope: LibraryEnvelope,
    output: OutputFormat,
) -> RestResult<Response> {
    match output {
        OutputFormat::Json => {
            let headers = CatalogHeaders::new().to_header_map();
            Ok((StatusCode::OK, headers, Json(envelope)).into_response())
        }
        OutputFormat::Human => {
            let html = render_human(&envelope)?;
            let headers = CatalogHeaders::new()
                .with_content_type(mime::TEXT_HTML_UTF_8.as_ref())
                .to_header_map();
            Ok((StatusCode::OK, headers, html).into_response())
        }
    }
}
