//! HTTP request handlers for the Axum web server.
//!
//! Each collection handler projects the aggregated upstream records into
//! their reduced form on every request. Nothing here performs network I/O.

pub mod people;
pub mod planets;

use axum::http::{Uri, header};
use axum::response::{IntoResponse, Response};
use holocron_core::{AggregatedCollection, CollectionResource, Projection};
use serde::Serialize;

use crate::error::HttpError;

/// Project every slot of a collection, keeping slot positions.
///
/// Empty slots (pages that failed to fetch) and records that fail to project
/// both become `None`, so the output always has one entry per upstream slot.
pub fn project_slots<T>(collection: &AggregatedCollection<T>) -> Vec<Option<T::Output>>
where
    T: CollectionResource + Projection,
{
    let projected: Vec<Option<T::Output>> = collection
        .slots()
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let record = slot.as_ref()?;
            match record.project() {
                Ok(projected) => Some(projected),
                Err(e) => {
                    tracing::warn!(
                        collection = T::COLLECTION,
                        index,
                        error = %e,
                        "Skipping record that failed projection"
                    );
                    None
                }
            }
        })
        .collect();

    let gaps = collection.len() - collection.filled();
    if gaps > 0 {
        tracing::debug!(collection = T::COLLECTION, gaps, "Serving collection with gaps");
    }

    projected
}

/// Serialize `value` as a JSON response body.
///
/// Serialization failures are logged and answered with `500`, never with an
/// empty success response.
pub fn json_response<S: Serialize>(value: &S) -> Result<Response, HttpError> {
    let body = serde_json::to_vec(value).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize response body");
        HttpError::Internal(format!("Failed to serialize response: {e}"))
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Serve the projected form of a whole collection.
pub(crate) fn collection_response<T>(collection: &AggregatedCollection<T>) -> Result<Response, HttpError>
where
    T: CollectionResource + Projection,
{
    json_response(&project_slots(collection))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> HttpError {
    HttpError::NotFound(format!("No route for {uri}"))
}
