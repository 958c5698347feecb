//! Search field metadata.
//!
//! - [`FieldRegistry`] - which record paths may be searched and which may be
//!   returned to clients

mod registry;

pub use registry::{FieldDefinition, FieldKind, FieldRegistry};
