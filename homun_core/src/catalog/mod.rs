//! Part catalog - lookup capability and content loading

mod drop;
mod parts;

pub use drop::DropOffer;
pub use parts::{
    default_catalog, load_catalog, parse_catalog_json, parse_catalog_toml, BodyPartCatalog,
    PartsConfig,
};

use crate::error::HomunError;
use crate::source::BodyPart;
use crate::types::PartId;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Lookup of body parts by id, injected into a Homun when equipping
pub trait PartCatalog {
    /// Find a part by id
    fn part(&self, id: PartId) -> Option<&BodyPart>;

    /// All ids in a stable order
    fn part_ids(&self) -> Vec<PartId>;

    /// Find a part or fail with [`HomunError::UnknownPartId`]
    fn lookup(&self, id: PartId) -> Result<&BodyPart, HomunError> {
        self.part(id).ok_or(HomunError::UnknownPartId(id))
    }
}

/// Catalog loading error
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Catalog validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, CatalogError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, CatalogError> {
    let config: T = serde_json::from_str(content)?;
    Ok(config)
}
