//! Port definitions (trait abstractions) for external systems.
//!
//! Core code depends on these traits; adapter crates implement them.

mod swapi;

pub use swapi::{PageSource, SwapiPortError, SwapiPortResult};
