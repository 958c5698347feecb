//! Server configuration for the library catalog API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CDNJS_API_PORT` | 8080 | Server port |
//! | `CDNJS_API_HOST` | 127.0.0.1 | Host to bind |
//! | `CDNJS_API_LOG_LEVEL` | info | Log level |
//! | `CDNJS_API_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `CDNJS_API_ENABLE_CORS` | true | Enable CORS |
//! | `CDNJS_API_CORS_ORIGINS` | * | Allowed origins |
//! | `CDNJS_API_CORS_METHODS` | GET,HEAD,OPTIONS | Allowed methods |
//! | `CDNJS_API_CORS_HEADERS` | * | Allowed headers |
//! | `CDNJS_API_CDN_BASE_URL` | https://cdnjs.cloudflare.com/ajax/libs | Base of `latest` URLs |
//! | `CDNJS_API_PROVIDER_PAGE_SIZE` | 1000 | Hits requested when searching without `limit` |
//! | `CDNJS_API_PROVIDER_TIMEOUT` | 4s | Timeout for hosted index requests |
//! | `CDNJS_API_INDEX_BACKEND` | memory | Index backend (`memory` or `algolia`) |
//! | `CDNJS_API_CATALOG_PATH` | - | JSON catalog for the memory backend |
//! | `ALGOLIA_APP_ID` | - | Hosted index application id |
//! | `ALGOLIA_API_KEY` | - | Hosted index search key |
//! | `ALGOLIA_INDEX` | libraries | Hosted index name |
//!
//! # Example
//!
//! ```rust
//! use cdnjs_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use url::Url;

/// Default base URL of CDN asset links.
pub const DEFAULT_CDN_BASE_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs";

/// Which search index backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IndexBackendKind {
    /// Catalog loaded from a JSON file and searched in process.
    #[default]
    Memory,
    /// Hosted Algolia index.
    Algolia,
}

impl fmt::Display for IndexBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexBackendKind::Memory => write!(f, "memory"),
            IndexBackendKind::Algolia => write!(f, "algolia"),
        }
    }
}

/// Server configuration for the library catalog API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "cdnjs-api")]
#[command(about = "Library catalog query API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "CDNJS_API_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "CDNJS_API_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CDNJS_API_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "CDNJS_API_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "CDNJS_API_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CDNJS_API_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "CDNJS_API_CORS_METHODS", default_value = "GET,HEAD,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "CDNJS_API_CORS_HEADERS", default_value = "*")]
    pub cors_headers: String,

    /// Base URL that `latest` asset links are built from.
    #[arg(long, env = "CDNJS_API_CDN_BASE_URL", default_value = DEFAULT_CDN_BASE_URL)]
    pub cdn_base_url: String,

    /// Number of hits requested from the index when a search has no limit.
    #[arg(long, env = "CDNJS_API_PROVIDER_PAGE_SIZE", default_value = "1000")]
    pub provider_page_size: usize,

    /// Timeout for a single hosted index request (e.g. "4s", "1500ms").
    #[arg(
        long,
        env = "CDNJS_API_PROVIDER_TIMEOUT",
        default_value = "4s",
        value_parser = humantime::parse_duration
    )]
    pub provider_timeout: Duration,

    /// Index backend.
    #[arg(long, env = "CDNJS_API_INDEX_BACKEND", value_enum, default_value_t = IndexBackendKind::Memory)]
    pub index_backend: IndexBackendKind,

    /// JSON catalog file for the memory backend.
    #[arg(long, env = "CDNJS_API_CATALOG_PATH")]
    pub catalog_path: Option<PathBuf>,

    /// Hosted index application id.
    #[arg(long, env = "ALGOLIA_APP_ID")]
    pub algolia_app_id: Option<String>,

    /// Hosted index search API key.
    #[arg(long, env = "ALGOLIA_API_KEY", hide_env_values = true)]
    pub algolia_api_key: Option<String>,

    /// Hosted index name.
    #[arg(long, env = "ALGOLIA_INDEX", default_value = "libraries")]
    pub algolia_index: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,HEAD,OPTIONS".to_string(),
            cors_headers: "*".to_string(),
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
            provider_page_size: 1000,
            provider_timeout: Duration::from_secs(4),
            index_backend: IndexBackendKind::Memory,
            catalog_path: None,
            algolia_app_id: None,
            algolia_api_key: None,
            algolia_index: "libraries".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse_from(["cdnjs-api"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the CDN base URL without a trailing slash.
    pub fn cdn_base(&self) -> &str {
        self.cdn_base_url.trim_end_matches('/')
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.provider_page_size == 0 {
            errors.push("Provider page size cannot be 0".to_string());
        }

        if self.provider_timeout.is_zero() {
            errors.push("Provider timeout cannot be 0".to_string());
        }

        if Url::parse(&self.cdn_base_url).is_err() {
            errors.push(format!("CDN base URL is not a valid URL: {}", self.cdn_base_url));
        }

        match self.index_backend {
            IndexBackendKind::Memory => {
                if self.catalog_path.is_none() {
                    errors.push("The memory backend requires a catalog path".to_string());
                }
            }
            IndexBackendKind::Algolia => {
                if self.algolia_app_id.as_deref().is_none_or(str::is_empty) {
                    errors.push("The algolia backend requires ALGOLIA_APP_ID".to_string());
                }
                if self.algolia_api_key.as_deref().is_none_or(str::is_empty) {
                    errors.push("The algolia backend requires ALGOLIA_API_KEY".to_string());
                }
                if self.algolia_index.trim().is_empty() {
                    errors.push("Algolia index name cannot be empty".to_string());
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_methods: "*".to_string(),
            ..Default::default()
        }
    }
}
