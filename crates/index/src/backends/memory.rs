//! In-memory index backend.
//!
//! Holds the whole catalog in process and answers queries the way a hosted
//! ranked-search index would: listings come back in catalog order, searches
//! are ranked by match quality and attribute priority, and over-long queries
//! are refused.

use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::SearchProvider;
use crate::error::{CatalogError, IndexError, IndexResult};
use crate::search::FieldRegistry;
use crate::types::{IndexQuery, LibraryRecord, SearchHits};

/// Longest search term (in characters) the index accepts.
pub const MAX_QUERY_LENGTH: usize = 512;

const BACKEND_NAME: &str = "memory";

/// How well a record attribute matched the search term. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchKind {
    Exact,
    Prefix,
    Substring,
    AllWords,
}

#[derive(Debug)]
struct IndexedRecord {
    record: LibraryRecord,
    /// JSON form of the record, used to resolve dotted attribute paths.
    document: Value,
}

/// Search index over a catalog held in memory.
///
/// # Example
///
/// ```
/// use cdnjs_index::backends::memory::InMemoryIndex;
/// use cdnjs_index::types::LibraryRecord;
///
/// let index = InMemoryIndex::new(vec![
///     LibraryRecord::new("jquery"),
///     LibraryRecord::new("lodash.js"),
/// ])
/// .unwrap();
/// assert_eq!(index.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryIndex {
    entries: Vec<IndexedRecord>,
}

impl InMemoryIndex {
    /// Builds an index from records in catalog order.
    ///
    /// Library names must be unique.
    pub fn new(records: Vec<LibraryRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut entries = Vec::with_capacity(records.len());

        for record in records {
            if !seen.insert(record.name.clone()) {
                return Err(CatalogError::DuplicateName { name: record.name });
            }
            let document = serde_json::to_value(&record).map_err(|source| {
                CatalogError::Encode {
                    name: record.name.clone(),
                    source,
                }
            })?;
            entries.push(IndexedRecord { record, document });
        }

        Ok(Self { entries })
    }

    /// Builds an index from a JSON array of records.
    ///
    /// `source` names where the JSON came from and is only used in errors.
    pub fn from_json(json: &str, source: &str) -> Result<Self, CatalogError> {
        let records: Vec<LibraryRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse {
                path: source.to_string(),
                source: e,
            })?;
        Self::new(records)
    }

    /// Loads a catalog file containing a JSON array of records.
    pub async fn from_catalog_file(path: impl AsRef<Path>) -> IndexResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Read {
                path: shown.clone(),
                source,
            })?;
        let index = Self::from_json(&json, &shown)?;

        info!(path = %shown, libraries = index.len(), "Loaded library catalog");
        Ok(index)
    }

    /// Returns the number of indexed libraries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index holds no libraries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn list(&self, cap: Option<usize>) -> SearchHits {
        let nb_hits = self.entries.len();
        let hits = self
            .entries
            .iter()
            .take(cap.unwrap_or(nb_hits))
            .map(|e| e.record.clone())
            .collect();
        SearchHits::new(hits, nb_hits)
    }

    fn rank(&self, term: &str, attributes: &[&'static str], cap: Option<usize>) -> SearchHits {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.list(cap);
        }
        let words: Vec<&str> = needle.split_whitespace().collect();

        // (match quality, attribute priority) then catalog position breaks ties
        let mut scored: Vec<((MatchKind, usize), usize)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                score(&entry.document, &needle, &words, attributes).map(|s| (s, position))
            })
            .collect();
        scored.sort_unstable();

        let nb_hits = scored.len();
        let hits = scored
            .into_iter()
            .take(cap.unwrap_or(nb_hits))
            .map(|(_, position)| self.entries[position].record.clone())
            .collect();
        SearchHits::new(hits, nb_hits)
    }
}

#[async_trait]
impl SearchProvider for InMemoryIndex {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn search(&self, query: &IndexQuery) -> IndexResult<SearchHits> {
        let Some(term) = query.search_term() else {
            return Ok(self.list(query.hits_per_page));
        };

        if term.chars().count() > MAX_QUERY_LENGTH {
            return Err(IndexError::QueryRejected {
                backend: BACKEND_NAME,
                message: format!("query exceeds {} characters", MAX_QUERY_LENGTH),
            });
        }

        let attributes = resolve_attributes(query)?;
        debug!(
            term = %term,
            attributes = ?attributes,
            cap = ?query.hits_per_page,
            "Ranking in-memory catalog"
        );

        Ok(self.rank(term, &attributes, query.hits_per_page))
    }
}

/// Returns the attributes to search, in ranking priority order.
fn resolve_attributes(query: &IndexQuery) -> IndexResult<Vec<&'static str>> {
    let registry = FieldRegistry::global();

    match query.restrict_searchable_attributes.as_deref() {
        None | Some([]) => Ok(registry.searchable_fields().collect()),
        Some(requested) => {
            if let Some(unknown) = requested.iter().find(|a| !registry.is_searchable(a)) {
                return Err(IndexError::QueryRejected {
                    backend: BACKEND_NAME,
                    message: format!(
                        "unknown attribute '{}' in restrictSearchableAttributes",
                        unknown
                    ),
                });
            }
            Ok(registry
                .searchable_fields()
                .filter(|f| requested.iter().any(|a| a.as_str() == *f))
                .collect())
        }
    }
}

/// Scores a record against the (lowercased) search term.
fn score(
    document: &Value,
    needle: &str,
    words: &[&str],
    attributes: &[&'static str],
) -> Option<(MatchKind, usize)> {
    let mut best: Option<(MatchKind, usize)> = None;
    let mut haystack = Vec::new();

    for (priority, attribute) in attributes.iter().enumerate() {
        let path: Vec<&str> = attribute.split('.').collect();
        let mut values = Vec::new();
        collect_strings(document, &path, &mut values);

        for value in values {
            let value = value.to_lowercase();
            let kind = if value == needle {
                Some(MatchKind::Exact)
            } else if value.starts_with(needle) {
                Some(MatchKind::Prefix)
            } else if value.contains(needle) {
                Some(MatchKind::Substring)
            } else {
                None
            };

            if let Some(kind) = kind {
                let candidate = (kind, priority);
                if best.is_none_or(|b| candidate < b) {
                    best = Some(candidate);
                }
            }
            haystack.push(value);
        }
    }

    if best.is_some() {
        return best;
    }

    // Multi-word terms also match when each word appears somewhere
    if words.len() > 1
        && words
            .iter()
            .all(|w| haystack.iter().any(|h| h.contains(w)))
    {
        return Some((MatchKind::AllWords, attributes.len()));
    }

    None
}

/// Collects the strings found at a dotted path, flattening arrays on the way.
fn collect_strings<'a>(value: &'a Value, path: &[&str], out: &mut Vec<&'a str>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_strings(item, path, out);
            }
        }
        Value::Object(map) => {
            if let Some((head, rest)) = path.split_first() {
                if let Some(child) = map.get(*head) {
                    collect_strings(child, rest, out);
                }
            }
        }
        Value::String(s) if path.is_empty() => out.push(s),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> InMemoryIndex {
        let records = json!([
            {
                "name": "jquery",
                "version": "3.7.1",
                "filename": "jquery.min.js",
                "keywords": ["jquery", "dom"],
                "github": {"user": "jquery", "repo": "jquery"}
            },
            {
                "name": "backbone.js",
                "version": "1.6.0",
                "filename": "backbone-min.js",
                "description": "Give your JS App some Backbone with Models, Views and Events.",
                "keywords": ["model", "view"],
                "github": {"user": "jashkenas", "repo": "backbone"}
            },
            {
                "name": "backbone.marionette",
                "version": "4.1.2",
                "filename": "backbone.marionette.min.js",
                "keywords": ["backbone.js", "marionette"],
                "github": {"user": "marionettejs", "repo": "backbone.marionette"}
            },
            {
                "name": "twitter-bootstrap",
                "version": "5.3.3",
                "filename": "js/bootstrap.min.js",
                "keywords": ["css", "framework"],
                "maintainers": [{"name": "mdo"}]
            },
            {
                "name": "bootstrap-select",
                "version": "1.13.18",
                "filename": "js/bootstrap-select.min.js",
                "keywords": ["twitter-bootstrap", "select"]
            }
        ]);
        InMemoryIndex::from_json(&records.to_string(), "test").unwrap()
    }

    fn names(hits: &SearchHits) -> Vec<&str> {
        hits.hits.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_listing_keeps_catalog_order() {
        let index = catalog();
        let hits = index.search(&IndexQuery::listing()).await.unwrap();
        assert_eq!(
            names(&hits),
            vec![
                "jquery",
                "backbone.js",
                "backbone.marionette",
                "twitter-bootstrap",
                "bootstrap-select"
            ]
        );
        assert_eq!(hits.nb_hits, 5);
    }

    #[tokio::test]
    async fn test_listing_cap_reports_all_matches() {
        let index = catalog();
        let hits = index
            .search(&IndexQuery::listing().with_hits_per_page(2))
            .await
            .unwrap();
        assert_eq!(names(&hits), vec!["jquery", "backbone.js"]);
        assert_eq!(hits.nb_hits, 5);
    }

    #[tokio::test]
    async fn test_exact_name_ranks_first() {
        let index = catalog();
        let hits = index
            .search(&IndexQuery::ranked("twitter-bootstrap"))
            .await
            .unwrap();
        assert_eq!(names(&hits), vec!["twitter-bootstrap", "bootstrap-select"]);
        assert_eq!(hits.nb_hits, 2);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let index = catalog();
        let hits = index.search(&IndexQuery::ranked("JQuery")).await.unwrap();
        assert_eq!(names(&hits)[0], "jquery");
    }

    #[tokio::test]
    async fn test_restricted_attributes() {
        let index = catalog();
        let query = IndexQuery::ranked("backbone.js").with_restricted_attributes(vec![
            "keywords".to_string(),
            "github.user".to_string(),
        ]);
        let hits = index.search(&query).await.unwrap();
        assert_eq!(names(&hits), vec!["backbone.marionette"]);

        let unrestricted = index.search(&IndexQuery::ranked("backbone.js")).await.unwrap();
        assert_eq!(names(&unrestricted)[0], "backbone.js");
    }

    #[tokio::test]
    async fn test_nested_index_only_attribute() {
        let index = catalog();
        let query = IndexQuery::ranked("mdo")
            .with_restricted_attributes(vec!["maintainers.name".to_string()]);
        let hits = index.search(&query).await.unwrap();
        assert_eq!(names(&hits), vec!["twitter-bootstrap"]);
    }

    #[tokio::test]
    async fn test_unknown_attribute_is_rejected() {
        let index = catalog();
        let query = IndexQuery::ranked("backbone.js")
            .with_restricted_attributes(vec!["this-field-doesnt-exist".to_string()]);
        let err = index.search(&query).await.unwrap_err();
        assert!(err.is_query_rejection());
    }

    #[tokio::test]
    async fn test_over_long_query_is_rejected() {
        let index = catalog();
        let err = index
            .search(&IndexQuery::ranked("a".repeat(MAX_QUERY_LENGTH + 1)))
            .await
            .unwrap_err();
        assert!(err.is_query_rejection());

        // Exactly at the limit is still accepted
        let hits = index
            .search(&IndexQuery::ranked("a".repeat(MAX_QUERY_LENGTH)))
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_multi_word_query() {
        let index = catalog();
        let hits = index
            .search(&IndexQuery::ranked("backbone models"))
            .await
            .unwrap();
        assert_eq!(names(&hits), vec!["backbone.js"]);
    }

    #[tokio::test]
    async fn test_blank_term_lists_everything() {
        let index = catalog();
        let hits = index.search(&IndexQuery::ranked("   ")).await.unwrap();
        assert_eq!(hits.nb_hits, 5);
        assert_eq!(names(&hits)[0], "jquery");
    }

    #[tokio::test]
    async fn test_repeated_searches_are_stable() {
        let index = catalog();
        let query = IndexQuery::ranked("backbone");
        let first = index.search(&query).await.unwrap();
        let second = index.search(&query).await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = InMemoryIndex::new(vec![LibraryRecord::new("a"), LibraryRecord::new("a")])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { name } if name == "a"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = InMemoryIndex::from_json("{not json", "broken.json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[tokio::test]
    async fn test_from_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"[{"name": "a"}, {"name": "b"}]"#).unwrap();

        let index = InMemoryIndex::from_catalog_file(&path).await.unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.backend_name(), "memory");
    }

    #[tokio::test]
    async fn test_missing_catalog_file() {
        let err = InMemoryIndex::from_catalog_file("/nonexistent/catalog.json")
            .await
            .unwrap_err();
        assert!(matches!(err, IndexError::Catalog(CatalogError::Read { .. })));
    }
}
