//! REST API test harness.
//!
//! Provides infrastructure for testing the REST API endpoints against the
//! fixture catalog or against providers that fail on purpose.

use std::time::Duration;

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use cdnjs_index::backends::memory::InMemoryIndex;
use cdnjs_index::core::SearchProvider;
use cdnjs_index::types::{IndexQuery, SearchHits};
use cdnjs_index::{IndexError, IndexResult};

use cdnjs_rest::{ServerConfig, create_app_with_config};

use super::fixtures;

/// Origin header sent with every request so CORS headers are produced.
pub const ORIGIN: HeaderName = HeaderName::from_static("origin");

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_listing() {
///     let harness = RestTestHarness::new();
///
///     let response = harness.get("/libraries").await;
///
///     response.assert_status_ok();
/// }
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// Server configuration.
    pub config: ServerConfig,
}

impl RestTestHarness {
    /// Creates a harness serving the fixture catalog from an in-memory index.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a harness serving the fixture catalog with the given config.
    pub fn with_config(config: ServerConfig) -> Self {
        let index = InMemoryIndex::new(fixtures::catalog()).expect("Failed to build index");
        Self::with_provider(index, config)
    }

    /// Creates a harness around any provider.
    pub fn with_provider<P>(provider: P, config: ServerConfig) -> Self
    where
        P: SearchProvider + Send + Sync + 'static,
    {
        let app = create_app_with_config(provider, config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, config }
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server
            .get(path)
            .add_header(ORIGIN, HeaderValue::from_static("https://example.com"))
            .await
    }
}

/// How a [`FailingProvider`] fails.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    /// The provider refuses the query.
    Rejected,
    /// The provider does not answer in time.
    Timeout,
    /// The provider cannot be reached.
    Unavailable,
    /// The provider answers garbage.
    InvalidResponse,
    /// The provider hangs far longer than any request timeout.
    Stall,
}

/// Provider that fails every search.
pub struct FailingProvider {
    failure: Failure,
}

impl FailingProvider {
    /// Creates a provider failing with the given failure.
    pub fn new(failure: Failure) -> Self {
        Self { failure }
    }
}

#[async_trait]
impl SearchProvider for FailingProvider {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn search(&self, _query: &IndexQuery) -> IndexResult<SearchHits> {
        let backend = self.backend_name();
        if let Failure::Stall = self.failure {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        Err(match self.failure {
            Failure::Rejected => IndexError::QueryRejected {
                backend,
                message: "Query is too long".to_string(),
            },
            Failure::Timeout => IndexError::Timeout {
                backend,
                timeout: Duration::from_secs(4),
            },
            Failure::Unavailable | Failure::Stall => IndexError::Unavailable {
                backend,
                message: "connection refused".to_string(),
            },
            Failure::InvalidResponse => IndexError::InvalidResponse {
                backend,
                message: "expected value at line 1 column 1".to_string(),
            },
        })
    }
}
