//! Response envelope.

use serde::Serialize;
use serde_json::Value;

/// The `{results, total, available}` body of `GET /libraries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LibraryEnvelope {
    /// Projected records, in provider order.
    pub results: Vec<Value>,

    /// Number of records in `results`.
    pub total: usize,

    /// Number of matching records before the `limit` cap.
    pub available: usize,
}

impl LibraryEnvelope {
    /// Wraps projected records.
    ///
    /// `available` is raised to `total` if the provider reported fewer
    /// matches than it returned.
    pub fn new(results: Vec<Value>, available: usize) -> Self {
        let total = results.len();
        Self {
            results,
            total,
            available: available.max(total),
        }
    }

    /// Creates an envelope without results.
    pub fn empty() -> Self {
        Self::default()
    }
}
