//! Typed views of the upstream wire schema.
//!
//! The transform pipeline itself is schema-agnostic and works on raw
//! `serde_json::Value` records; these models are a typed convenience for
//! library consumers that want to deserialize individual records. Scalar
//! attributes are strings on the wire (including numeric-looking ones
//! like `height` or `population`), and cross-reference fields are lists
//! of absolute upstream addresses.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub birth_year: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub edited: OffsetDateTime,
    pub eye_color: String,
    pub films: Vec<String>,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub homeworld: String,
    pub mass: String,
    pub name: String,
    pub skin_color: String,
    pub species: Vec<String>,
    pub starships: Vec<String>,
    pub url: String,
    pub vehicles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub climate: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    pub diameter: String,
    #[serde(with = "time::serde::rfc3339")]
    pub edited: OffsetDateTime,
    pub films: Vec<String>,
    pub gravity: String,
    pub name: String,
    pub orbital_period: String,
    pub population: String,
    pub residents: Vec<String>,
    pub rotation_period: String,
    pub surface_water: String,
    pub terrain: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starship {
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub cost_in_credits: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    pub crew: String,
    #[serde(with = "time::serde::rfc3339")]
    pub edited: OffsetDateTime,
    pub films: Vec<String>,
    pub hyperdrive_rating: String,
    pub length: String,
    pub manufacturer: String,
    pub max_atmosphering_speed: String,
    pub model: String,
    pub name: String,
    pub passengers: String,
    pub pilots: Vec<String>,
    pub starship_class: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub characters: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    pub director: String,
    #[serde(with = "time::serde::rfc3339")]
    pub edited: OffsetDateTime,
    pub episode_id: i64,
    pub opening_crawl: String,
    pub planets: Vec<String>,
    pub producer: String,
    pub release_date: String,
    pub species: Vec<String>,
    pub starships: Vec<String>,
    pub title: String,
    pub url: String,
    pub vehicles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub average_height: String,
    pub average_lifespan: String,
    pub classification: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    pub designation: String,
    #[serde(with = "time::serde::rfc3339")]
    pub edited: OffsetDateTime,
    pub eye_colors: String,
    pub films: Vec<String>,
    pub hair_colors: String,
    /// Null for species with no recorded homeworld (e.g. droids).
    pub homeworld: Option<String>,
    pub language: String,
    pub name: String,
    pub people: Vec<String>,
    pub skin_colors: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub cargo_capacity: String,
    pub consumables: String,
    pub cost_in_credits: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    pub crew: String,
    #[serde(with = "time::serde::rfc3339")]
    pub edited: OffsetDateTime,
    pub films: Vec<String>,
    pub length: String,
    pub manufacturer: String,
    pub max_atmosphering_speed: String,
    pub model: String,
    pub name: String,
    pub passengers: String,
    pub pilots: Vec<String>,
    pub url: String,
    pub vehicle_class: String,
}
