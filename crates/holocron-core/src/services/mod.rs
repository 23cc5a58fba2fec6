//! Core services.
//!
//! Services orchestrate ports and domain logic without knowing about
//! concrete implementations.

mod aggregator;

pub use aggregator::aggregate_collection;
