//! Hosted ranked-search backend.
//!
//! Talks to an Algolia index over its REST API. Ranked searches go to the
//! `query` endpoint; listings page through the `browse` endpoint with a
//! cursor so the full catalog can be returned in index order.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::core::SearchProvider;
use crate::error::{IndexError, IndexResult};
use crate::types::{IndexQuery, LibraryRecord, SearchHits};

const BACKEND_NAME: &str = "algolia";

const APP_ID_HEADER: &str = "X-Algolia-Application-Id";
const API_KEY_HEADER: &str = "X-Algolia-API-Key";

/// Largest page the hosted index serves in one request.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Default time allowed for one request to the index.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// Connection settings for the hosted index.
#[derive(Debug, Clone)]
pub struct AlgoliaConfig {
    /// Application identifier.
    pub app_id: String,

    /// Search-only API key.
    pub api_key: String,

    /// Name of the index holding the catalog.
    pub index_name: String,

    /// Override for the API host, e.g. for a proxy. Defaults to the
    /// application's DSN host.
    pub host: Option<String>,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Hits requested per page when no explicit cap applies.
    pub page_size: usize,
}

impl AlgoliaConfig {
    /// Creates a configuration with default host, timeout and page size.
    pub fn new(
        app_id: impl Into<String>,
        api_key: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            api_key: api_key.into(),
            index_name: index_name.into(),
            host: None,
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Overrides the API host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Returns the base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> String {
        match &self.host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => format!("https://{}-dsn.algolia.net", self.app_id.to_lowercase()),
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/1/indexes/{}/{}",
            self.base_url(),
            self.index_name,
            action
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryResponse {
    #[serde(default)]
    hits: Vec<LibraryRecord>,
    #[serde(default)]
    nb_hits: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrowseResponse {
    #[serde(default)]
    hits: Vec<LibraryRecord>,
    #[serde(default)]
    nb_hits: usize,
    cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Search provider backed by a hosted Algolia index.
#[derive(Debug, Clone)]
pub struct AlgoliaBackend {
    client: reqwest::Client,
    config: AlgoliaConfig,
}

impl AlgoliaBackend {
    /// Creates a backend with its own HTTP client.
    pub fn new(config: AlgoliaConfig) -> IndexResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IndexError::Unavailable {
                backend: BACKEND_NAME,
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    /// Returns the connection settings.
    pub fn config(&self) -> &AlgoliaConfig {
        &self.config
    }

    async fn post<T: DeserializeOwned>(&self, action: &str, body: &Value) -> IndexResult<T> {
        let url = self.config.endpoint(action);
        debug!(url = %url, "Sending index request");

        let response = self
            .client
            .post(&url)
            .header(APP_ID_HEADER, &self.config.app_id)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = classify_status(status.as_u16(), &text);
            warn!(status = status.as_u16(), error = %err, "Index request failed");
            return Err(err);
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                IndexError::InvalidResponse {
                    backend: BACKEND_NAME,
                    message: e.to_string(),
                }
            }
        })
    }

    async fn ranked(&self, term: &str, query: &IndexQuery) -> IndexResult<SearchHits> {
        let hits_per_page = query
            .hits_per_page
            .unwrap_or(self.config.page_size)
            .min(self.config.page_size);
        let body = query_body(
            term,
            hits_per_page,
            query.restrict_searchable_attributes.as_deref(),
        );

        let response: QueryResponse = self.post("query", &body).await?;
        Ok(SearchHits::new(response.hits, response.nb_hits))
    }

    async fn browse(&self, cap: Option<usize>) -> IndexResult<SearchHits> {
        let mut hits = Vec::new();
        let mut nb_hits = 0;
        let mut cursor: Option<String> = None;

        loop {
            let remaining = cap.map(|c| c.saturating_sub(hits.len()));
            if remaining == Some(0) {
                break;
            }
            let page_size = remaining
                .unwrap_or(self.config.page_size)
                .min(self.config.page_size);

            let body = browse_body(page_size, cursor.as_deref());
            let page: BrowseResponse = self.post("browse", &body).await?;

            nb_hits = nb_hits.max(page.nb_hits);
            hits.extend(page.hits);

            match page.cursor {
                Some(next) if !next.is_empty() => cursor = Some(next),
                _ => break,
            }
        }

        if let Some(cap) = cap {
            hits.truncate(cap);
        }
        let nb_hits = nb_hits.max(hits.len());
        Ok(SearchHits::new(hits, nb_hits))
    }

    fn transport_error(&self, err: reqwest::Error) -> IndexError {
        if err.is_timeout() {
            IndexError::Timeout {
                backend: BACKEND_NAME,
                timeout: self.config.timeout,
            }
        } else {
            IndexError::Unavailable {
                backend: BACKEND_NAME,
                message: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl SearchProvider for AlgoliaBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn search(&self, query: &IndexQuery) -> IndexResult<SearchHits> {
        match query.search_term() {
            Some(term) => self.ranked(term, query).await,
            None => self.browse(query.hits_per_page).await,
        }
    }
}

/// Builds the body of a ranked `query` request.
fn query_body(term: &str, hits_per_page: usize, restrict: Option<&[String]>) -> Value {
    let mut body = Map::new();
    body.insert("query".to_string(), json!(term));
    body.insert("hitsPerPage".to_string(), json!(hits_per_page));
    if let Some(attributes) = restrict.filter(|a| !a.is_empty()) {
        body.insert("restrictSearchableAttributes".to_string(), json!(attributes));
    }
    body.insert("attributesToHighlight".to_string(), json!([]));
    body.insert("attributesToSnippet".to_string(), json!([]));
    Value::Object(body)
}

/// Builds the body of one `browse` page request.
fn browse_body(hits_per_page: usize, cursor: Option<&str>) -> Value {
    match cursor {
        Some(cursor) => json!({ "hitsPerPage": hits_per_page, "cursor": cursor }),
        None => json!({ "hitsPerPage": hits_per_page }),
    }
}

/// Maps a non-success HTTP status from the index to an error.
///
/// A 400 means the index understood the request and refused this particular
/// query; anything else is treated as the index being unavailable.
fn classify_status(status: u16, body: &str) -> IndexError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("HTTP {}", status));

    match status {
        400 => IndexError::QueryRejected {
            backend: BACKEND_NAME,
            message,
        },
        _ => IndexError::Unavailable {
            backend: BACKEND_NAME,
            message: format!("HTTP {}: {}", status, message),
        },
    }
}
