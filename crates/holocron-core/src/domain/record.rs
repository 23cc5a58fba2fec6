//! Reduced records served to clients, and the projection into them.
//!
//! Upstream records carry every field SWAPI knows about. Clients only need a
//! handful, decoded into real types: IDs instead of URLs, `Option<f64>`
//! instead of `"unknown"`-or-digits text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::remote::{RemotePerson, RemotePlanet};
use crate::error::ConversionResult;
use crate::numeric::parse_optional_number;
use crate::resource::resource_id_from_url;

/// ID of the SWAPI planet record named `"unknown"`.
///
/// People whose home planet is not known reference this record instead of
/// carrying a null homeworld.
pub const UNKNOWN_PLANET_ID: u32 = 28;

/// Map an upstream record to its reduced client-facing form.
///
/// Projection is pure: the same input always yields the same output.
pub trait Projection {
    /// The reduced record type.
    type Output: Serialize;

    /// Project this record, failing on the first field that cannot be decoded.
    fn project(&self) -> ConversionResult<Self::Output>;
}

/// Decode a homeworld reference, treating the "unknown" planet as absent.
pub fn homeworld_id(url: &str) -> ConversionResult<Option<u32>> {
    let id = resource_id_from_url(url)?;
    Ok((id != UNKNOWN_PLANET_ID).then_some(id))
}

// ─────────────────────────────────────────────────────────────────────────────
// Person
// ─────────────────────────────────────────────────────────────────────────────

/// A person, reduced to the fields clients consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
    /// Height in centimeters; `None` when upstream reports it as unknown.
    pub height: Option<f64>,
    /// Mass in kilograms; `None` when upstream reports it as unknown.
    pub mass: Option<f64>,
    /// ID of the home planet; `None` when the home planet is unknown.
    pub homeworld: Option<u32>,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
}

impl Projection for RemotePerson {
    type Output = Person;

    fn project(&self) -> ConversionResult<Person> {
        Ok(Person {
            id: resource_id_from_url(&self.url)?,
            name: self.name.clone(),
            height: parse_optional_number(&self.height)?,
            mass: parse_optional_number(&self.mass)?,
            homeworld: homeworld_id(&self.homeworld)?,
            created: self.created,
            edited: self.edited,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Planet
// ─────────────────────────────────────────────────────────────────────────────

/// A planet, reduced to the fields clients consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: u32,
    pub name: String,
    pub climate: String,
    /// Diameter in kilometers; `None` when unknown.
    pub diameter: Option<f64>,
    /// Population count; `None` when unknown.
    pub population: Option<f64>,
    /// IDs of the people living on this planet, in upstream order.
    pub residents: Vec<u32>,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
}

impl Projection for RemotePlanet {
    type Output = Planet;

    fn project(&self) -> ConversionResult<Planet> {
        let residents = self
            .residents
            .iter()
            .map(String::as_str)
            .map(resource_id_from_url)
            .collect::<ConversionResult<Vec<_>>>()?;

        Ok(Planet {
            id: resource_id_from_url(&self.url)?,
            name: self.name.clone(),
            climate: self.climate.clone(),
            diameter: parse_optional_number(&self.diameter)?,
            population: parse_optional_number(&self.population)?,
            residents,
            created: self.created,
            edited: self.edited,
        })
    }
}
