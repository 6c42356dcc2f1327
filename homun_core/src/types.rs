//! Core identifiers and enums shared across the crate

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog key for a body part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(pub u32);

impl From<u32> for PartId {
    fn from(id: u32) -> Self {
        PartId(id)
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Slot a body part occupies on a Homun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartCategory {
    Core,
    Legs,
    Arms,
    Accessory,
    /// Tag from content data this build does not know about.
    /// Such parts load into a catalog but cannot be equipped.
    #[serde(other)]
    Unrecognized,
}

impl PartCategory {
    /// Get all equippable categories
    pub fn all() -> &'static [PartCategory] {
        &[
            PartCategory::Core,
            PartCategory::Legs,
            PartCategory::Arms,
            PartCategory::Accessory,
        ]
    }

    /// Whether this category feeds the base stat aggregation
    pub fn contributes_to_base(&self) -> bool {
        matches!(
            self,
            PartCategory::Core | PartCategory::Legs | PartCategory::Arms
        )
    }
}
