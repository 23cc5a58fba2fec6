//! Planet handlers.

use axum::extract::State;
use axum::response::Response;

use super::collection_response;
use crate::error::HttpError;
use crate::state::AppState;

/// List every planet, projected, in upstream order.
pub async fn list(State(state): State<AppState>) -> Result<Response, HttpError> {
    collection_response(state.planets.as_ref())
}
