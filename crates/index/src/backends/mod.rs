//! Index backend implementations.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | In-memory | `memory` | Catalog loaded from a JSON file, ranked in process |
//! | Algolia | `algolia` | Hosted ranked-search index reached over HTTPS |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "memory")]
//! use cdnjs_index::backends::memory::InMemoryIndex;
//!
//! # #[cfg(feature = "memory")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let index = InMemoryIndex::from_catalog_file("./data/catalog.json").await?;
//! println!("{} libraries loaded", index.len());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "algolia")]
pub mod algolia;
