//! Response building for the libraries endpoint.
//!
//! - [`projection`] - Shape records according to the requested fields
//! - [`envelope`] - The `{results, total, available}` envelope
//! - [`headers`] - Cache and content-type headers
//! - [`human`] - HTML rendering for `output=human`
//! - [`format`] - Pick JSON or HTML for the response body

pub mod envelope;
pub mod format;
pub mod headers;
pub mod human;
pub mod projection;

pub use envelope::LibraryEnvelope;
pub use format::format_envelope_response;
pub use headers::{CACHE_CONTROL_PUBLIC, CatalogHeaders};
pub use human::render_human;
pub use projection::{project_record, project_records};
