//! Search query builder.
//!
//! Converts a parsed library query into the index layer's [`IndexQuery`].

use cdnjs_index::types::IndexQuery;

use super::LibraryQuery;
use crate::config::ServerConfig;

/// Builds an IndexQuery from a parsed library query.
///
/// - Without a search term the index is asked for a listing, capped by
///   `limit` when one was given.
/// - With a search term the index is asked for a ranked search restricted to
///   `search_fields` (`None` searches everything). Without a `limit` the
///   configured provider page size applies.
///
/// The search term is passed through untouched; the index decides whether it
/// is acceptable.
pub fn build_index_query(
    request: &LibraryQuery,
    search_fields: Option<Vec<String>>,
    config: &ServerConfig,
) -> IndexQuery {
    match request.search() {
        None => {
            let query = IndexQuery::listing();
            match request.limit() {
                Some(limit) => query.with_hits_per_page(limit),
                None => query,
            }
        }
        Some(term) => {
            let mut query = IndexQuery::ranked(term)
                .with_hits_per_page(request.limit().unwrap_or(config.provider_page_size));
            if let Some(fields) = search_fields {
                query = query.with_restricted_attributes(fields);
            }
            query
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_without_limit() {
        let request = LibraryQuery::from_query_string("");
        let query = build_index_query(&request, None, &ServerConfig::default());
        assert!(query.is_listing());
        assert_eq!(query.hits_per_page, None);
    }

    #[test]
    fn test_listing_with_limit() {
        let request = LibraryQuery::from_query_string("limit=10");
        let query = build_index_query(&request, None, &ServerConfig::default());
        assert!(query.is_listing());
        assert_eq!(query.hits_per_page, Some(10));
    }

    #[test]
    fn test_search_uses_provider_page_size() {
        let request = LibraryQuery::from_query_string("search=jquery");
        let config = ServerConfig {
            provider_page_size: 500,
            ..Default::default()
        };
        let query = build_index_query(&request, None, &config);
        assert_eq!(query.search_term(), Some("jquery"));
        assert_eq!(query.hits_per_page, Some(500));
        assert!(query.restrict_searchable_attributes.is_none());
    }

    #[test]
    fn test_search_with_limit_and_fields() {
        let request = LibraryQuery::from_query_string("search=backbone.js&limit=3");
        let query = build_index_query(
            &request,
            Some(vec!["keywords".to_string()]),
            &ServerConfig::default(),
        );
        assert_eq!(query.hits_per_page, Some(3));
        assert_eq!(
            query.restrict_searchable_attributes,
            Some(vec!["keywords".to_string()])
        );
    }

    #[test]
    fn test_long_term_not_truncated() {
        let term = "a".repeat(2000);
        let request = LibraryQuery::from_query_string(&format!("search={}", term));
        let query = build_index_query(&request, None, &ServerConfig::default());
        assert_eq!(query.search_term().map(str::len), Some(2000));
    }
}
