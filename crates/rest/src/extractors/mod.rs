//! Axum extractors and request interpretation for the libraries endpoint.
//!
//! - [`LibraryQuery`] - Extract and parse the library query parameters
//! - [`field_filter`] - Allow-list requested fields against the registry
//! - [`search_query_builder`] - Build the index query

pub mod field_filter;
mod library_query;
pub mod search_query_builder;

pub use field_filter::{filter_projection, filter_search};
pub use library_query::{LibraryQuery, OutputFormat, RequestedFields};
pub use search_query_builder::build_index_query;
