//! Homun - A creature assembled from body parts

use crate::catalog::PartCatalog;
use crate::combat::{apply_damage, resolve_attack, resolve_attack_with_rng, AttackResult, DamageTaken};
use crate::error::HomunError;
use crate::modifier::{ActiveModifier, ModifierData, TemporalLedger};
use crate::source::{aggregate, BodyPart, OnHitModifiers};
use crate::stats::HomunStats;
use crate::types::{PartCategory, PartId};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Composite creature built from equippable body parts
///
/// Base stats are the sum of the core, legs and arms bundles and are
/// rebuilt on every equip. Accessories are held but do not feed the base
/// aggregation. Timed modifiers live in an ordered ledger and are folded
/// on top of base stats by [`Homun::effective_stats`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Homun {
    name: String,
    #[serde(default)]
    is_player: bool,

    core: Option<BodyPart>,
    legs: Option<BodyPart>,
    arms: Option<BodyPart>,
    #[serde(default)]
    accessories: Vec<BodyPart>,

    stats: HomunStats,
    #[serde(default)]
    temporal: TemporalLedger,
}

impl Homun {
    /// Create an empty Homun with no parts
    pub fn new(name: impl Into<String>) -> Self {
        Homun {
            name: name.into(),
            is_player: false,
            core: None,
            legs: None,
            arms: None,
            accessories: Vec::new(),
            stats: HomunStats::new(),
            temporal: TemporalLedger::new(),
        }
    }

    /// Mark this Homun as player controlled
    pub fn player(mut self) -> Self {
        self.is_player = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_player(&self) -> bool {
        self.is_player
    }

    // === Equipment ===

    /// Look a part up in the catalog and equip it
    pub fn equip_body_part(
        &mut self,
        catalog: &impl PartCatalog,
        id: PartId,
    ) -> Result<(), HomunError> {
        let part = catalog.lookup(id)?.clone();
        self.equip(part)?;
        Ok(())
    }

    /// Equip a part into its slot, rebuilding base stats
    ///
    /// Returns the part previously in that slot, if any. Accessories are
    /// appended and never replace anything.
    pub fn equip(&mut self, part: BodyPart) -> Result<Option<BodyPart>, HomunError> {
        tracing::debug!(homun = %self.name, part = %part.name, category = ?part.category, "equipping part");

        let replaced = match part.category {
            PartCategory::Core => self.core.replace(part),
            PartCategory::Legs => self.legs.replace(part),
            PartCategory::Arms => self.arms.replace(part),
            PartCategory::Accessory => {
                self.accessories.push(part);
                None
            }
            PartCategory::Unrecognized => {
                return Err(HomunError::InvalidCategory { part_id: part.id });
            }
        };

        self.recompute_base_stats();
        Ok(replaced)
    }

    /// Reset base stats to the sum of core, legs and arms
    pub fn recompute_base_stats(&mut self) {
        let slots = [&self.core, &self.legs, &self.arms];
        self.stats = aggregate(slots.into_iter().flatten());
        tracing::trace!(homun = %self.name, stats = ?self.stats, "recomputed base stats");
    }

    pub fn core(&self) -> Option<&BodyPart> {
        self.core.as_ref()
    }

    pub fn legs(&self) -> Option<&BodyPart> {
        self.legs.as_ref()
    }

    pub fn arms(&self) -> Option<&BodyPart> {
        self.arms.as_ref()
    }

    pub fn accessories(&self) -> &[BodyPart] {
        &self.accessories
    }

    /// Get a reference to the part in a slot (first accessory for `Accessory`)
    pub fn equipped(&self, category: PartCategory) -> Option<&BodyPart> {
        match category {
            PartCategory::Core => self.core(),
            PartCategory::Legs => self.legs(),
            PartCategory::Arms => self.arms(),
            PartCategory::Accessory => self.accessories.first(),
            PartCategory::Unrecognized => None,
        }
    }

    /// On-hit modifiers used in combat (core part only)
    pub fn on_hit_modifiers(&self) -> Result<&OnHitModifiers, HomunError> {
        self.core
            .as_ref()
            .map(|core| &core.on_hit)
            .ok_or(HomunError::MissingCore)
    }

    // === Stats ===

    /// Base stats without timed modifiers (health reflects damage taken)
    pub fn base_stats(&self) -> &HomunStats {
        &self.stats
    }

    pub(crate) fn base_stats_mut(&mut self) -> &mut HomunStats {
        &mut self.stats
    }

    /// Current health (may be negative)
    pub fn health(&self) -> f64 {
        self.stats.health
    }

    /// Base stats with every active modifier folded in, floored at zero
    pub fn effective_stats(&self) -> HomunStats {
        let mut effective = self.temporal.fold(&self.stats);
        effective.floor_at_zero();
        effective
    }

    // === Timed modifiers ===

    /// Sources of the active modifiers, in the order they were applied
    pub fn active_modifiers(&self) -> impl Iterator<Item = &ModifierData> {
        self.temporal.active_modifiers()
    }

    /// Active ledger entries with remaining durations
    pub fn temporal_ledger(&self) -> &TemporalLedger {
        &self.temporal
    }

    /// Advance modifier durations, returning the ones that expired
    pub fn tick(&mut self, delta: f64) -> Vec<ActiveModifier> {
        self.temporal.tick(delta)
    }

    /// Roll a modifier's chance and add it on success (RNG handled internally)
    pub fn receive_temporal_status(&mut self, modifier: &ModifierData) -> bool {
        self.temporal.receive(modifier)
    }

    /// Roll a modifier's chance with a provided RNG
    pub fn receive_temporal_status_with_rng(
        &mut self,
        modifier: &ModifierData,
        rng: &mut impl Rng,
    ) -> bool {
        self.temporal.receive_with_rng(modifier, rng)
    }

    // === Combat ===

    /// Attack another Homun (RNG handled internally)
    pub fn attack(&mut self, target: &mut Homun) -> Result<AttackResult, HomunError> {
        resolve_attack(self, target)
    }

    /// Attack another Homun with a provided RNG
    pub fn attack_with_rng(
        &mut self,
        target: &mut Homun,
        rng: &mut impl Rng,
    ) -> Result<AttackResult, HomunError> {
        resolve_attack_with_rng(self, target, rng)
    }

    /// Take damage through effective damage reduction
    pub fn receive_damage(&mut self, amount: f64) -> DamageTaken {
        apply_damage(self, amount)
    }
}
