//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// The context is never mutated after bootstrap, so handlers share it
/// without locking.
pub type AppState = Arc<AxumContext>;
