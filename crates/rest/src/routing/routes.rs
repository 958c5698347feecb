//! API route configuration.

use axum::{Router, routing::get};
use cdnjs_index::core::SearchProvider;

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// - `GET /libraries` - List or search libraries
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
///
/// Any other path answers `404` with a JSON error body.
pub fn create_routes<P>(state: AppState<P>) -> Router
where
    P: SearchProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/libraries", get(handlers::libraries_handler::<P>))
        .route("/health", get(handlers::health_handler::<P>))
        .route("/_liveness", get(handlers::liveness_handler))
        .fallback(handlers::not_found_handler)
        .with_state(state)
}
