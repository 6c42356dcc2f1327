//! BodyPart - Equippable catalog item

use crate::modifier::ModifierData;
use crate::source::StatSource;
use crate::stats::HomunStats;
use crate::types::{PartCategory, PartId};
use serde::{Deserialize, Serialize};

/// Modifiers a part inflicts each time its owner attacks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnHitModifiers {
    /// Rolled against the attacker
    pub self_inflicting: Vec<ModifierData>,
    /// Rolled against the target
    pub enemy_inflicting: Vec<ModifierData>,
}

impl OnHitModifiers {
    pub fn is_empty(&self) -> bool {
        self.self_inflicting.is_empty() && self.enemy_inflicting.is_empty()
    }
}

/// Immutable body part definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPart {
    pub id: PartId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: PartCategory,
    /// Fixed contribution to base stats
    #[serde(default)]
    pub stats: HomunStats,
    #[serde(default)]
    pub on_hit: OnHitModifiers,
}

impl BodyPart {
    /// Create a part with no stats or modifiers
    pub fn new(id: PartId, name: impl Into<String>, category: PartCategory) -> Self {
        BodyPart {
            id,
            name: name.into(),
            description: String::new(),
            category,
            stats: HomunStats::default(),
            on_hit: OnHitModifiers::default(),
        }
    }

    /// Set the stat bundle
    pub fn with_stats(mut self, stats: HomunStats) -> Self {
        self.stats = stats;
        self
    }

    /// Add a modifier rolled against the attacker on hit
    pub fn with_self_modifier(mut self, modifier: ModifierData) -> Self {
        self.on_hit.self_inflicting.push(modifier);
        self
    }

    /// Add a modifier rolled against the target on hit
    pub fn with_enemy_modifier(mut self, modifier: ModifierData) -> Self {
        self.on_hit.enemy_inflicting.push(modifier);
        self
    }
}

impl StatSource for BodyPart {
    fn id(&self) -> &str {
        &self.name
    }

    fn apply(&self, stats: &mut HomunStats) {
        *stats += self.stats;
    }
}
