//! HTTP request handlers.
//!
//! - [`libraries`] - List or search the library catalog
//! - [`health`] - Health check endpoints
//! - [`fallback`] - JSON 404 for unknown paths

pub mod fallback;
pub mod health;
pub mod libraries;

// Re-export handlers for convenience
pub use fallback::not_found_handler;
pub use health::{health_handler, liveness_handler};
pub use libraries::libraries_handler;
