//! Library listing and search handler.
//!
//! `GET [base]/libraries` lists the catalog or searches it, depending on the
//! `search` parameter, and projects each match onto the requested fields.

use axum::{extract::State, response::Response};
use cdnjs_index::core::SearchProvider;
use cdnjs_index::search::FieldRegistry;
use tracing::{debug, error, warn};

use crate::error::{RestError, RestResult};
use crate::extractors::{LibraryQuery, build_index_query, filter_projection, filter_search};
use crate::responses::{LibraryEnvelope, format_envelope_response, project_records};
use crate::state::AppState;

/// Handler for the libraries endpoint.
///
/// # HTTP Request
///
/// `GET [base]/libraries?[fields=...]&[search=...]&[search_fields=...]&[limit=...]&[output=human]`
///
/// # Response
///
/// - `200 OK` - Envelope with the matching libraries. A query the index
///   refuses yields an empty envelope.
/// - `502 Bad Gateway` - The index is unreachable or answered badly
/// - `504 Gateway Timeout` - The index did not answer in time
pub async fn libraries_handler<P>(
    State(state): State<AppState<P>>,
    request: LibraryQuery,
) -> RestResult<Response>
where
    P: SearchProvider + Send + Sync,
{
    let registry = FieldRegistry::global();

    let fields = filter_projection(request.fields(), registry);
    let search_fields = filter_search(request.search_fields(), registry);
    let query = build_index_query(&request, search_fields, state.config());

    debug!(
        search = ?request.search(),
        fields = ?fields,
        restrict = ?query.restrict_searchable_attributes,
        hits_per_page = ?query.hits_per_page,
        "Processing libraries request"
    );

    let hits = match state.provider().search(&query).await {
        Ok(hits) => hits,
        Err(e) if e.is_query_rejection() => {
            warn!(
                backend = state.provider().backend_name(),
                error = %e,
                "Index rejected query, returning empty result"
            );
            return format_envelope_response(LibraryEnvelope::empty(), request.output());
        }
        Err(e) => {
            error!(
                backend = state.provider().backend_name(),
                error = %e,
                "Index request failed"
            );
            return Err(RestError::from(e));
        }
    };

    let results = project_records(&hits.hits, &fields, state.cdn_base());
    // Without a limit every fetched match is returned. Ranked searches never
    // report more than one provider page as available.
    let available = match request.limit() {
        None => results.len(),
        Some(_) if query.is_listing() => hits.nb_hits,
        Some(_) => hits.nb_hits.min(state.config().provider_page_size),
    };
    let envelope = LibraryEnvelope::new(results, available);

    debug!(
        total = envelope.total,
        available = envelope.available,
        "Libraries request complete"
    );

    format_envelope_response(envelope, request.output())
}
