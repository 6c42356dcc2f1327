//! ModifierData - Definition of a timed status effect

use crate::stats::{HomunStats, Stat};
use serde::{Deserialize, Serialize};

/// A timed effect a body part can inflict on hit
///
/// `flat` is added to each attribute; `percent` is a fraction of the
/// running value (0.10 = +10%). Both are applied per attribute when the
/// effect is folded into a Homun's effective stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierData {
    /// Display name (e.g., "Bleed", "Adrenaline")
    pub name: String,
    /// Probability in [0, 1] that the effect lands
    #[serde(default = "default_chance")]
    pub chance: f64,
    /// Flat increment per attribute
    #[serde(default)]
    pub flat: HomunStats,
    /// Percent increment per attribute, as a fraction
    #[serde(default)]
    pub percent: HomunStats,
    /// Duration in seconds
    pub duration: f64,
}

fn default_chance() -> f64 {
    1.0
}

impl ModifierData {
    /// Create a modifier that always lands and changes nothing yet
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        ModifierData {
            name: name.into(),
            chance: 1.0,
            flat: HomunStats::default(),
            percent: HomunStats::default(),
            duration,
        }
    }

    /// Set the trigger chance
    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = chance;
        self
    }

    /// Set a flat increment
    pub fn with_flat(mut self, stat: Stat, value: f64) -> Self {
        *self.flat.get_mut(stat) = value;
        self
    }

    /// Set a percent increment (fraction)
    pub fn with_percent(mut self, stat: Stat, value: f64) -> Self {
        *self.percent.get_mut(stat) = value;
        self
    }

    /// Fold this modifier into a running stat bundle
    pub fn apply_to(&self, running: &mut HomunStats) {
        for &stat in Stat::all() {
            let current = running.get(stat);
            *running.get_mut(stat) =
                current + self.flat.get(stat) + current * self.percent.get(stat);
        }
    }

    /// Whether every increment in this modifier is zero or negative
    pub fn is_debuff(&self) -> bool {
        self.flat.iter().all(|(_, v)| v <= 0.0) && self.percent.iter().all(|(_, v)| v <= 0.0)
    }
}
