pub mod error;
pub mod swapi;

pub use error::ClientError;
pub use swapi::{CatalogClient, DynCatalogClient, SwapiClient, DEFAULT_BASE_URL};
