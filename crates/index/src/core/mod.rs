//! Core index traits.
//!
//! - [`SearchProvider`] - ranked search and listing over the library catalog

mod provider;

pub use provider::SearchProvider;
