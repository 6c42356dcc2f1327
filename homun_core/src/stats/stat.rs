//! Stat - Named attributes of a Homun

use serde::{Deserialize, Serialize};
use std::fmt;

/// One attribute in a [`HomunStats`](super::HomunStats) bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Health,
    Mana,
    /// Percentage of incoming damage removed (20 = 20%)
    DamageReduction,
    Attack,
    Speed,
    AbilityPower,
    Evasion,
    /// Probability in [0, 1] compared against a uniform roll
    CriticalChance,
    /// Percentage multiplier applied on crit (150 = 1.5x)
    CriticalDamage,
    Accuracy,
}

impl Stat {
    /// All attributes, in fold order
    pub fn all() -> &'static [Stat] {
        &[
            Stat::Health,
            Stat::Mana,
            Stat::DamageReduction,
            Stat::Attack,
            Stat::Speed,
            Stat::AbilityPower,
            Stat::Evasion,
            Stat::CriticalChance,
            Stat::CriticalDamage,
            Stat::Accuracy,
        ]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Health => "Health",
            Stat::Mana => "Mana",
            Stat::DamageReduction => "Damage Reduction",
            Stat::Attack => "Attack",
            Stat::Speed => "Speed",
            Stat::AbilityPower => "Ability Power",
            Stat::Evasion => "Evasion",
            Stat::CriticalChance => "Critical Chance",
            Stat::CriticalDamage => "Critical Damage",
            Stat::Accuracy => "Accuracy",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
