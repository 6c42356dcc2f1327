//! Body part catalog loading

use super::{CatalogError, PartCatalog};
use crate::modifier::ModifierData;
use crate::source::BodyPart;
use crate::types::PartId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Container for body part definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartsConfig {
    #[serde(default)]
    pub parts: Vec<BodyPart>,
}

/// In-memory catalog keyed by part id
#[derive(Debug, Clone, Default)]
pub struct BodyPartCatalog {
    parts: BTreeMap<PartId, BodyPart>,
}

impl BodyPartCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a validated catalog from part definitions
    pub fn from_parts(parts: Vec<BodyPart>) -> Result<Self, CatalogError> {
        let mut catalog = BodyPartCatalog::new();
        for part in parts {
            catalog.insert(part)?;
        }
        Ok(catalog)
    }

    /// Add a part, rejecting duplicate ids and malformed numbers
    pub fn insert(&mut self, part: BodyPart) -> Result<(), CatalogError> {
        validate_part(&part)?;
        if self.parts.contains_key(&part.id) {
            return Err(CatalogError::ValidationError(format!(
                "duplicate part id {}",
                part.id
            )));
        }
        self.parts.insert(part.id, part);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterate parts in id order
    pub fn iter(&self) -> impl Iterator<Item = &BodyPart> {
        self.parts.values()
    }
}

impl PartCatalog for BodyPartCatalog {
    fn part(&self, id: PartId) -> Option<&BodyPart> {
        self.parts.get(&id)
    }

    fn part_ids(&self) -> Vec<PartId> {
        self.parts.keys().copied().collect()
    }
}

fn validate_part(part: &BodyPart) -> Result<(), CatalogError> {
    if !part.stats.is_finite() {
        return Err(CatalogError::ValidationError(format!(
            "part {} ({}) has a non-finite stat",
            part.id, part.name
        )));
    }

    let modifiers = part
        .on_hit
        .self_inflicting
        .iter()
        .chain(part.on_hit.enemy_inflicting.iter());
    for modifier in modifiers {
        validate_modifier(modifier)
            .map_err(|msg| CatalogError::ValidationError(format!("part {}: {}", part.id, msg)))?;
    }

    Ok(())
}

fn validate_modifier(modifier: &ModifierData) -> Result<(), String> {
    if !(0.0..=1.0).contains(&modifier.chance) {
        return Err(format!(
            "modifier '{}' chance {} outside [0, 1]",
            modifier.name, modifier.chance
        ));
    }
    if !modifier.duration.is_finite() || modifier.duration < 0.0 {
        return Err(format!(
            "modifier '{}' has invalid duration {}",
            modifier.name, modifier.duration
        ));
    }
    if !modifier.flat.is_finite() || !modifier.percent.is_finite() {
        return Err(format!("modifier '{}' has a non-finite increment", modifier.name));
    }
    Ok(())
}

/// Load a catalog from a file, choosing JSON or TOML by extension
pub fn load_catalog(path: &Path) -> Result<BodyPartCatalog, CatalogError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config: PartsConfig = if is_json {
        let content = std::fs::read_to_string(path)?;
        super::parse_json(&content)?
    } else {
        super::load_toml(path)?
    };

    BodyPartCatalog::from_parts(config.parts)
}

/// Load a catalog from a TOML string
pub fn parse_catalog_toml(content: &str) -> Result<BodyPartCatalog, CatalogError> {
    let config: PartsConfig = super::parse_toml(content)?;
    BodyPartCatalog::from_parts(config.parts)
}

/// Load a catalog from a JSON string
pub fn parse_catalog_json(content: &str) -> Result<BodyPartCatalog, CatalogError> {
    let config: PartsConfig = super::parse_json(content)?;
    BodyPartCatalog::from_parts(config.parts)
}

/// Get the bundled catalog
pub fn default_catalog() -> BodyPartCatalog {
    let toml = include_str!("../../config/parts.toml");
    parse_catalog_toml(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "bundled part catalog failed to load");
        BodyPartCatalog::new()
    })
}
