//! # cdnjs-rest - Library catalog query API
//!
//! This crate implements the read-only HTTP API over the cdnjs library
//! catalog. It interprets query parameters, builds a constrained request
//! against a full-text search index, enforces an allow-list of searchable
//! and returnable fields, and shapes each match into the response contract.
//!
//! ## Features
//!
//! - **Listing and search**: catalog order without `search`, provider
//!   ranking with it
//! - **Projection**: `fields` selects the returned attributes, unknown ones
//!   are dropped
//! - **Search restriction**: `search_fields` narrows the searched attributes
//! - **Caching**: successful responses are publicly cacheable for six hours
//! - **Human output**: `output=human` renders an HTML page for browsers
//!
//! ## Backend Support
//!
//! Search backends are configured through feature flags:
//!
//! - `memory` - In-memory index loaded from a JSON catalog (default)
//! - `algolia` - Hosted Algolia index (default)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cdnjs_index::backends::memory::InMemoryIndex;
//! use cdnjs_rest::{create_app, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load the catalog
//!     let index = InMemoryIndex::from_catalog_file("catalog.json").await?;
//!
//!     // Create the Axum application
//!     let app = create_app(index);
//!
//!     // Start the server
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Endpoint | HTTP Method | URL Pattern |
//! |----------|-------------|-------------|
//! | libraries | GET | `/libraries?fields=&search=&search_fields=&limit=&output=` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//!
//! ## Error Handling
//!
//! Invalid parameter values never fail a request; they fall back to their
//! defaults. Index failures are returned as JSON error bodies:
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 404 | Unknown path |
//! | 502 | Index unreachable or answered badly |
//! | 504 | Index timed out |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (provider, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Parameter parsing, allow-listing, index query building
//! - [`responses`] - Projection, envelope, headers and rendering
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{IndexBackendKind, ServerConfig};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use cdnjs_index::core::SearchProvider;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<P>(provider: P) -> Router
where
    P: SearchProvider + Send + Sync + 'static,
{
    create_app_with_config(provider, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust
/// use cdnjs_index::backends::memory::InMemoryIndex;
/// use cdnjs_rest::{create_app_with_config, ServerConfig};
///
/// let config = ServerConfig {
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(InMemoryIndex::default(), config);
/// ```
pub fn create_app_with_config<P>(provider: P, config: ServerConfig) -> Router
where
    P: SearchProvider + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with index backend: {}",
        provider.backend_name()
    );

    // Create application state
    let state = AppState::new(Arc::new(provider), config.clone());

    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(service_builder);

    // CORS is outermost so timeout responses carry its headers
    if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    }
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "cdnjs_rest={level},cdnjs_index={level},cdnjs_api={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
