//! People handlers.

use axum::extract::State;
use axum::response::Response;

use super::collection_response;
use crate::error::HttpError;
use crate::state::AppState;

/// List every person, projected, in upstream order.
pub async fn list(State(state): State<AppState>) -> Result<Response, HttpError> {
    collection_response(state.people.as_ref())
}
