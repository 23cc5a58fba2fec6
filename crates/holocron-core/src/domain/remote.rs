//! Upstream record types.
//!
//! These mirror the SWAPI JSON payloads. Numeric-looking fields stay as text
//! here; they are decoded once, during projection.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record type served by a SWAPI collection endpoint.
pub trait CollectionResource: DeserializeOwned + Send + Sync + 'static {
    /// Path segment of the collection under the API root (e.g. `people`).
    const COLLECTION: &'static str;
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Envelope
// ─────────────────────────────────────────────────────────────────────────────

/// One page of a collection resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records in the collection (not in this page).
    pub count: usize,
    /// URL of the next page, if any. Not used for aggregation.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any. Not used for aggregation.
    #[serde(default)]
    pub previous: Option<String>,
    /// Records on this page, in document order.
    pub results: Vec<T>,
}

// ─────────────────────────────────────────────────────────────────────────────
// People
// ─────────────────────────────────────────────────────────────────────────────

/// A person as returned by `/api/people/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePerson {
    pub name: String,
    /// Height in centimeters, or `"unknown"`.
    pub height: String,
    /// Mass in kilograms, or `"unknown"`. May contain thousands separators.
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    /// URL of the person's home planet.
    pub homeworld: String,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
    /// Self-reference; the person's ID is its last path segment.
    pub url: String,
}

impl CollectionResource for RemotePerson {
    const COLLECTION: &'static str = "people";
}

// ─────────────────────────────────────────────────────────────────────────────
// Planets
// ─────────────────────────────────────────────────────────────────────────────

/// A planet as returned by `/api/planets/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePlanet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    /// Diameter in kilometers, or `"unknown"`.
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    /// Population count, or `"unknown"`.
    pub population: String,
    /// URLs of people who live on this planet.
    #[serde(default)]
    pub residents: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
    pub url: String,
}

impl CollectionResource for RemotePlanet {
    const COLLECTION: &'static str = "planets";
}
