//! Search provider trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::IndexResult;
use crate::types::{IndexQuery, SearchHits};

/// A full-text index over the library catalog.
///
/// Implementations answer two kinds of [`IndexQuery`]:
///
/// - **listing** (no search term): records in catalog order, unranked
/// - **ranked** (search term): records ordered by relevance, matched only
///   against `restrict_searchable_attributes` when given
///
/// In both cases at most `hits_per_page` records are returned and
/// [`SearchHits::nb_hits`] reports how many matched before that cap.
///
/// Implementations must not retry internally: a failure is reported once, to
/// the caller.
///
/// # Example
///
/// ```no_run
/// use cdnjs_index::core::SearchProvider;
/// use cdnjs_index::types::IndexQuery;
///
/// async fn first_match<P: SearchProvider>(provider: &P, term: &str) -> Option<String> {
///     let hits = provider
///         .search(&IndexQuery::ranked(term).with_hits_per_page(1))
///         .await
///         .ok()?;
///     hits.hits.into_iter().next().map(|r| r.name)
/// }
/// ```
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Returns a short name identifying the backend.
    fn backend_name(&self) -> &'static str;

    /// Runs a listing or ranked query.
    async fn search(&self, query: &IndexQuery) -> IndexResult<SearchHits>;
}

#[async_trait]
impl<P> SearchProvider for Arc<P>
where
    P: SearchProvider + ?Sized,
{
    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }

    async fn search(&self, query: &IndexQuery) -> IndexResult<SearchHits> {
        (**self).search(query).await
    }
}
