//! # cdnjs-index - Library catalog search index layer
//!
//! This crate holds everything the cdnjs API needs to talk to the full-text
//! index that stores the library catalog:
//!
//! - [`types`] - The [`LibraryRecord`](types::LibraryRecord) model and the
//!   outbound [`IndexQuery`](types::IndexQuery) / inbound
//!   [`SearchHits`](types::SearchHits) types
//! - [`search`] - The static field registry that decides which record paths
//!   may be searched and which may be returned to clients
//! - [`core`] - The [`SearchProvider`](core::SearchProvider) trait every index
//!   backend implements
//! - [`error`] - Provider error types
//! - [`backends`] - Index backend implementations
//!
//! # Backend Features
//!
//! - `memory` (default) - In-memory index seeded from a JSON catalog file
//! - `algolia` (default) - Hosted ranked-search index reached over HTTPS
//!
//! # Quick Start
//!
//! ```no_run
//! use cdnjs_index::backends::memory::InMemoryIndex;
//! use cdnjs_index::core::SearchProvider;
//! use cdnjs_index::types::IndexQuery;
//!
//! # async fn example() -> Result<(), cdnjs_index::error::IndexError> {
//! let index = InMemoryIndex::from_catalog_file("catalog.json").await?;
//!
//! let hits = index.search(&IndexQuery::ranked("jquery")).await?;
//! for record in &hits.hits {
//!     println!("{}", record.name);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod search;
pub mod types;

pub use error::{IndexError, IndexResult};
