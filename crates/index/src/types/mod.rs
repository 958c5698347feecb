//! Core types for the index layer.
//!
//! - [`LibraryRecord`] - A catalog entry as stored in the search index
//! - [`IndexQuery`] - An outbound request to a search provider
//! - [`SearchHits`] - The ordered matches a provider returns
//!
//! # Examples
//!
//! ## Deriving the CDN URL of a library
//!
//! ```
//! use cdnjs_index::types::LibraryRecord;
//!
//! let record: LibraryRecord = serde_json::from_value(serde_json::json!({
//!     "name": "jquery",
//!     "version": "3.7.1",
//!     "filename": "jquery.min.js",
//!     "objectID": "jquery"
//! }))
//! .unwrap();
//!
//! assert_eq!(
//!     record.latest_url("https://cdnjs.cloudflare.com/ajax/libs").as_deref(),
//!     Some("https://cdnjs.cloudflare.com/ajax/libs/jquery/3.7.1/jquery.min.js")
//! );
//! ```
//!
//! ## Building a restricted search
//!
//! ```
//! use cdnjs_index::types::IndexQuery;
//!
//! let query = IndexQuery::ranked("backbone.js")
//!     .with_restricted_attributes(vec!["keywords".to_string()])
//!     .with_hits_per_page(10);
//!
//! assert!(!query.is_listing());
//! assert_eq!(query.search_term(), Some("backbone.js"));
//! ```

mod library;
mod query;

pub use library::{GithubInfo, LibraryRecord, RepositoryInfo};
pub use query::{IndexQuery, SearchHits};
