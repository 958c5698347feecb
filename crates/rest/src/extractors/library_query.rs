//! Library query parameters extractor.
//!
//! Parses the query string of `GET /libraries` into a typed request. Parsing
//! is total: values that cannot be interpreted fall back to their defaults
//! instead of failing the request.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use url::form_urlencoded;

/// Response fields requested through `fields`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestedFields {
    /// No `fields` parameter: only the base fields are returned.
    #[default]
    Default,
    /// `fields=*`: every projectable field is returned.
    All,
    /// An explicit list, in request order, without duplicates.
    Listed(Vec<String>),
}

/// Requested output representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Machine-readable JSON (default).
    #[default]
    Json,
    /// HTML page for browsers.
    Human,
}

/// Axum extractor for the library query parameters.
///
/// Recognised parameters are `fields`, `search`, `search_fields`, `limit`
/// and `output`. Everything else is ignored.
///
/// # Example
///
/// ```rust
/// use cdnjs_rest::extractors::{LibraryQuery, OutputFormat, RequestedFields};
///
/// let query = LibraryQuery::from_query_string("search=jquery&fields=version,keywords&limit=5");
/// assert_eq!(query.search(), Some("jquery"));
/// assert_eq!(query.limit(), Some(5));
/// assert_eq!(
///     query.fields(),
///     &RequestedFields::Listed(vec!["version".to_string(), "keywords".to_string()])
/// );
/// assert_eq!(query.output(), OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryQuery {
    /// Search term; `None` means listing mode.
    search: Option<String>,

    /// Raw requested search fields, before allow-listing.
    search_fields: Vec<String>,

    /// Requested response fields, before allow-listing.
    fields: RequestedFields,

    /// Result cap.
    limit: Option<usize>,

    /// Output representation.
    output: OutputFormat,
}

impl LibraryQuery {
    /// Parses a raw (still percent-encoded) query string.
    pub fn from_query_string(raw: &str) -> Self {
        let mut search = None;
        let mut limit = None;
        let mut output = None;
        let mut fields = Vec::new();
        let mut search_fields = Vec::new();

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "search" => {
                    if search.is_none() {
                        search = Some(value.into_owned());
                    }
                }
                "search_fields" => merge_list(&mut search_fields, &value),
                "fields" => merge_list(&mut fields, &value),
                "limit" => {
                    if limit.is_none() {
                        limit = Some(parse_limit(&value));
                    }
                }
                "output" => {
                    if output.is_none() {
                        output = Some(parse_output(&value));
                    }
                }
                _ => {}
            }
        }

        let fields = if fields.iter().any(|f| f == "*") {
            RequestedFields::All
        } else if fields.is_empty() {
            RequestedFields::Default
        } else {
            RequestedFields::Listed(fields)
        };

        Self {
            search: search.filter(|s| !s.is_empty()),
            search_fields,
            fields,
            limit: limit.flatten(),
            output: output.unwrap_or_default(),
        }
    }

    /// Returns the search term, `None` in listing mode.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns true if no search term was given.
    pub fn is_listing(&self) -> bool {
        self.search.is_none()
    }

    /// Returns the requested search fields, before allow-listing.
    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    /// Returns the requested response fields, before allow-listing.
    pub fn fields(&self) -> &RequestedFields {
        &self.fields
    }

    /// Returns the result cap.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the output representation.
    pub fn output(&self) -> OutputFormat {
        self.output
    }
}

/// Appends comma-separated entries, trimmed, skipping empties and duplicates.
fn merge_list(target: &mut Vec<String>, value: &str) {
    for entry in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !target.iter().any(|existing| existing == entry) {
            target.push(entry.to_string());
        }
    }
}

fn parse_limit(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

fn parse_output(value: &str) -> OutputFormat {
    if value.trim().eq_ignore_ascii_case("human") {
        OutputFormat::Human
    } else {
        OutputFormat::Json
    }
}

impl<S> FromRequestParts<S> for LibraryQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(LibraryQuery::from_query_string(
            parts.uri.query().unwrap_or_default(),
        ))
    }
}
