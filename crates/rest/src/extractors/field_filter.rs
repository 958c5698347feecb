//! Field allow-listing.
//!
//! Requested response and search fields are intersected with the field
//! registry. Unknown names are dropped without failing the request.

use cdnjs_index::search::FieldRegistry;
use tracing::debug;

use super::RequestedFields;

/// Fields every projected record carries.
pub const BASE_FIELDS: [&str; 2] = ["name", "latest"];

/// Returns the response fields to emit for each record.
pub fn filter_projection(requested: &RequestedFields, registry: &FieldRegistry) -> Vec<String> {
    match requested {
        RequestedFields::Default => BASE_FIELDS.iter().map(|f| f.to_string()).collect(),
        RequestedFields::All => registry.projectable_fields().map(String::from).collect(),
        RequestedFields::Listed(names) => {
            let mut fields: Vec<String> = BASE_FIELDS.iter().map(|f| f.to_string()).collect();
            for name in names {
                if !registry.is_projectable(name) {
                    debug!(field = %name, "Dropping unknown response field");
                    continue;
                }
                if !fields.contains(name) {
                    fields.push(name.clone());
                }
            }
            fields
        }
    }
}

/// Returns the attributes a search may be restricted to.
///
/// `None` means the search runs over every searchable attribute, which is
/// also the outcome when nothing requested survives filtering.
pub fn filter_search(requested: &[String], registry: &FieldRegistry) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    for name in requested {
        if !registry.is_searchable(name) {
            debug!(field = %name, "Dropping unknown search field");
            continue;
        }
        if !fields.contains(name) {
            fields.push(name.clone());
        }
    }

    if fields.is_empty() { None } else { Some(fields) }
}
