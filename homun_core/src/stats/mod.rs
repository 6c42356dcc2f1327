//! HomunStats - The ten-attribute stat bundle

mod stat;

pub use stat::Stat;

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// A bundle of numeric attributes
///
/// Used for a part's fixed contribution, a Homun's base stats, the derived
/// effective view, and for a modifier's flat and percent increments.
/// Missing fields in content files default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomunStats {
    pub health: f64,
    pub mana: f64,
    pub damage_reduction: f64,
    pub attack: f64,
    pub speed: f64,
    pub ability_power: f64,
    pub evasion: f64,
    pub critical_chance: f64,
    pub critical_damage: f64,
    pub accuracy: f64,
}

impl HomunStats {
    /// All attributes at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, stat: Stat, value: f64) -> Self {
        *self.get_mut(stat) = value;
        self
    }

    /// Read one attribute
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Health => self.health,
            Stat::Mana => self.mana,
            Stat::DamageReduction => self.damage_reduction,
            Stat::Attack => self.attack,
            Stat::Speed => self.speed,
            Stat::AbilityPower => self.ability_power,
            Stat::Evasion => self.evasion,
            Stat::CriticalChance => self.critical_chance,
            Stat::CriticalDamage => self.critical_damage,
            Stat::Accuracy => self.accuracy,
        }
    }

    /// Mutable access to one attribute
    pub fn get_mut(&mut self, stat: Stat) -> &mut f64 {
        match stat {
            Stat::Health => &mut self.health,
            Stat::Mana => &mut self.mana,
            Stat::DamageReduction => &mut self.damage_reduction,
            Stat::Attack => &mut self.attack,
            Stat::Speed => &mut self.speed,
            Stat::AbilityPower => &mut self.ability_power,
            Stat::Evasion => &mut self.evasion,
            Stat::CriticalChance => &mut self.critical_chance,
            Stat::CriticalDamage => &mut self.critical_damage,
            Stat::Accuracy => &mut self.accuracy,
        }
    }

    /// Iterate `(stat, value)` pairs in fold order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        Stat::all().iter().map(move |&s| (s, self.get(s)))
    }

    /// Clamp every attribute to be at least zero
    pub fn floor_at_zero(&mut self) {
        for &stat in Stat::all() {
            let value = self.get_mut(stat);
            *value = value.max(0.0);
        }
    }

    /// True if every attribute is zero
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, v)| v == 0.0)
    }

    /// True if every attribute is a finite number
    pub fn is_finite(&self) -> bool {
        self.iter().all(|(_, v)| v.is_finite())
    }
}

impl AddAssign for HomunStats {
    fn add_assign(&mut self, rhs: Self) {
        for &stat in Stat::all() {
            *self.get_mut(stat) += rhs.get(stat);
        }
    }
}

impl Add for HomunStats {
    type Output = HomunStats;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let stats = HomunStats::new();
        assert!(stats.is_zero());
    }

    #[test]
    fn test_add_is_per_attribute() {
        let a = HomunStats::new().with(Stat::Health, 30.0).with(Stat::Attack, 5.0);
        let b = HomunStats::new().with(Stat::Health, 20.0).with(Stat::Speed, 2.0);

        let sum = a + b;
        assert!((sum.health - 50.0).abs() < f64::EPSILON);
        assert!((sum.attack - 5.0).abs() < f64::EPSILON);
        assert!((sum.speed - 2.0).abs() < f64::EPSILON);
        assert!((sum.mana - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = HomunStats::new().with(Stat::Mana, 10.0);
        let mut copy = original;
        copy.mana = 99.0;
        assert!((original.mana - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_floor_at_zero() {
        let mut stats = HomunStats::new()
            .with(Stat::Evasion, -4.0)
            .with(Stat::Accuracy, 12.0);
        stats.floor_at_zero();
        assert_eq!(stats.evasion, 0.0);
        assert!((stats.accuracy - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_get_matches_field() {
        let stats = HomunStats {
            critical_damage: 150.0,
            ..HomunStats::default()
        };
        assert!((stats.get(Stat::CriticalDamage) - 150.0).abs() < f64::EPSILON);
        assert_eq!(stats.iter().count(), Stat::all().len());
    }

    #[test]
    fn test_partial_toml_defaults_missing_fields() {
        let stats: HomunStats = toml::from_str("health = 40.0\nattack = 7.5").unwrap();
        assert!((stats.health - 40.0).abs() < f64::EPSILON);
        assert!((stats.attack - 7.5).abs() < f64::EPSILON);
        assert_eq!(stats.mana, 0.0);
    }
}
