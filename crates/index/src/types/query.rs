//! Search request and response types exchanged with index providers.

use serde::{Deserialize, Serialize};

use super::LibraryRecord;

/// A request to a search provider.
///
/// A query without a search term is a listing: the provider returns records
/// in catalog order without ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexQuery {
    /// The search term, `None` for a listing.
    pub query: Option<String>,

    /// Attributes the term is matched against; `None` searches every
    /// searchable attribute.
    pub restrict_searchable_attributes: Option<Vec<String>>,

    /// Maximum number of hits to return; `None` returns every match.
    pub hits_per_page: Option<usize>,
}

impl IndexQuery {
    /// Creates a listing query.
    pub fn listing() -> Self {
        Self::default()
    }

    /// Creates a ranked query for the given term.
    pub fn ranked(term: impl Into<String>) -> Self {
        Self {
            query: Some(term.into()),
            ..Default::default()
        }
    }

    /// Restricts the attributes the term is matched against.
    pub fn with_restricted_attributes(mut self, attributes: Vec<String>) -> Self {
        self.restrict_searchable_attributes = Some(attributes);
        self
    }

    /// Caps the number of hits.
    pub fn with_hits_per_page(mut self, hits_per_page: usize) -> Self {
        self.hits_per_page = Some(hits_per_page);
        self
    }

    /// Returns true if this query has no search term.
    pub fn is_listing(&self) -> bool {
        self.query.is_none()
    }

    /// Returns the search term.
    pub fn search_term(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

/// Ordered matches returned by a provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHits {
    /// Matching records, in provider order, at most `hits_per_page` of them.
    pub hits: Vec<LibraryRecord>,

    /// Number of matches the provider found before applying the cap.
    pub nb_hits: usize,
}

impl SearchHits {
    /// Creates a new result.
    pub fn new(hits: Vec<LibraryRecord>, nb_hits: usize) -> Self {
        Self { hits, nb_hits }
    }

    /// Creates an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of returned hits.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Returns true if no hits were returned.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
