use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The six collection kinds exposed by the upstream catalog.
///
/// Closed enum so dispatch on kind is exhaustive; parsing is the single
/// place where an unknown kind string can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    People,
    Planets,
    Starships,
    Films,
    Species,
    Vehicles,
}

impl ResourceKind {
    /// All kinds, in upstream collection order.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::People,
        ResourceKind::Planets,
        ResourceKind::Starships,
        ResourceKind::Films,
        ResourceKind::Species,
        ResourceKind::Vehicles,
    ];

    /// Upstream collection path segment for this kind.
    pub fn collection_path(&self) -> &'static str {
        match self {
            ResourceKind::People => "people",
            ResourceKind::Planets => "planets",
            ResourceKind::Starships => "starships",
            ResourceKind::Films => "films",
            ResourceKind::Species => "species",
            ResourceKind::Vehicles => "vehicles",
        }
    }

    /// The record field that the `filter` query parameter matches against.
    ///
    /// Films are titled, everything else is named.
    pub fn filter_field(&self) -> &'static str {
        match self {
            ResourceKind::Films => "title",
            _ => "name",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_path())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    /// Accepts singular and plural aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "people" | "person" => Ok(ResourceKind::People),
            "planets" | "planet" => Ok(ResourceKind::Planets),
            "starships" | "starship" => Ok(ResourceKind::Starships),
            "films" | "film" => Ok(ResourceKind::Films),
            "species" | "specie" => Ok(ResourceKind::Species),
            "vehicles" | "vehicle" => Ok(ResourceKind::Vehicles),
            _ => Err(CoreError::unsupported_kind(s)),
        }
    }
}
