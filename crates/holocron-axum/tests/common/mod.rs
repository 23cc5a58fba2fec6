//! Shared fixtures for the Axum integration tests.

#![allow(dead_code)]

use holocron_core::{AggregatedCollection, RemotePerson, RemotePlanet};
use serde_json::{Value, json};

/// A person as the upstream API returns it.
pub fn person(id: u32, mass: &str, homeworld: u32) -> RemotePerson {
    serde_json::from_value(person_json(id, mass, homeworld)).expect("valid person fixture")
}

/// Raw upstream JSON for a person.
pub fn person_json(id: u32, mass: &str, homeworld: u32) -> Value {
    json!({
        "name": format!("Person {id}"),
        "height": "172",
        "mass": mass,
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": format!("https://swapi.dev/api/planets/{homeworld}/"),
        "films": ["https://swapi.dev/api/films/1/"],
        "species": [],
        "vehicles": [],
        "starships": [],
        "created": "2014-12-09T13:50:51.644000Z",
        "edited": "2014-12-20T21:17:56.891000Z",
        "url": format!("https://swapi.dev/api/people/{id}/")
    })
}

/// A planet as the upstream API returns it.
pub fn planet(id: u32, population: &str, residents: &[u32]) -> RemotePlanet {
    serde_json::from_value(planet_json(id, population, residents)).expect("valid planet fixture")
}

/// Raw upstream JSON for a planet.
pub fn planet_json(id: u32, population: &str, residents: &[u32]) -> Value {
    let residents: Vec<String> = residents
        .iter()
        .map(|r| format!("https://swapi.dev/api/people/{r}/"))
        .collect();

    json!({
        "name": format!("Planet {id}"),
        "rotation_period": "23",
        "orbital_period": "304",
        "diameter": "10,465",
        "climate": "arid",
        "gravity": "1 standard",
        "terrain": "desert",
        "surface_water": "1",
        "population": population,
        "residents": residents,
        "films": [],
        "created": "2014-12-09T13:50:49.641000Z",
        "edited": "2014-12-20T20:58:18.411000Z",
        "url": format!("https://swapi.dev/api/planets/{id}/")
    })
}

/// `count` well-formed people laid out over upstream pages.
pub fn people(count: u32) -> AggregatedCollection<RemotePerson> {
    AggregatedCollection::from_records((1..=count).map(|id| person(id, "77", 1)).collect())
}

/// A small planet collection.
pub fn planets() -> AggregatedCollection<RemotePlanet> {
    AggregatedCollection::from_records(vec![
        planet(1, "200000", &[1, 2]),
        planet(2, "unknown", &[]),
    ])
}
