//! Application state for the library catalog API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the search provider and the server configuration.

use std::sync::Arc;

use cdnjs_index::core::SearchProvider;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `P` - The search provider type (must implement [`SearchProvider`])
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use cdnjs_index::backends::memory::InMemoryIndex;
/// use cdnjs_rest::{AppState, ServerConfig};
///
/// let index = InMemoryIndex::default();
/// let state = AppState::new(Arc::new(index), ServerConfig::default());
/// assert_eq!(state.cdn_base(), "https://cdnjs.cloudflare.com/ajax/libs");
/// ```
pub struct AppState<P> {
    /// The search provider.
    provider: Arc<P>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since P is wrapped in Arc and doesn't need to be Clone
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            config: Arc::clone(&self.config),
        }
    }
}

impl<P: SearchProvider> AppState<P> {
    /// Creates a new AppState with the given provider and configuration.
    pub fn new(provider: Arc<P>, config: ServerConfig) -> Self {
        Self {
            provider,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the search provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL of CDN asset links.
    pub fn cdn_base(&self) -> &str {
        self.config.cdn_base()
    }
}
