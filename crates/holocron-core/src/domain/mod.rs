//! Core domain types.
//!
//! # Structure
//!
//! - `remote` - upstream record shapes exactly as SWAPI sends them
//! - `record` - reduced records served to clients, and the projection into them
//! - `collection` - the fixed-size collection assembled from all pages

mod collection;
mod record;
mod remote;

pub use collection::{AggregatedCollection, MAX_COLLECTION_COUNT, PAGE_SIZE, total_pages};
pub use record::{Person, Planet, Projection, UNKNOWN_PLANET_ID, homeworld_id};
pub use remote::{CollectionResource, Page, RemotePerson, RemotePlanet};
