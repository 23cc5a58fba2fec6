#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod numeric;
pub mod ports;
pub mod resource;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AggregatedCollection, CollectionResource, MAX_COLLECTION_COUNT, PAGE_SIZE, Page, Person, Planet, Projection,
    RemotePerson, RemotePlanet, UNKNOWN_PLANET_ID, homeworld_id, total_pages,
};
pub use error::{ConversionError, ConversionResult};
pub use numeric::{UNKNOWN_SENTINEL, parse_optional_number};
pub use ports::{PageSource, SwapiPortError, SwapiPortResult};
pub use resource::resource_id_from_url;
pub use services::aggregate_collection;
