//! TemporalLedger - Ordered set of active timed modifiers

use super::{ActiveModifier, ModifierData};
use crate::source::StatSource;
use crate::stats::HomunStats;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Active timed modifiers in insertion order
///
/// Order is significant: percent increments compound against the running
/// value, so folding the same entries in a different order gives a
/// different result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemporalLedger {
    entries: Vec<ActiveModifier>,
}

impl TemporalLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll against the modifier's chance (RNG handled internally)
    pub fn receive(&mut self, modifier: &ModifierData) -> bool {
        let mut rng = rand::thread_rng();
        self.receive_with_rng(modifier, &mut rng)
    }

    /// Roll a uniform [0, 1) draw against `modifier.chance`; on success
    /// append a new entry at full duration. Returns whether it landed.
    pub fn receive_with_rng(&mut self, modifier: &ModifierData, rng: &mut impl Rng) -> bool {
        let roll = rng.gen::<f64>();
        if roll < modifier.chance {
            tracing::debug!(
                modifier = %modifier.name,
                duration = modifier.duration,
                debuff = modifier.is_debuff(),
                "applying modifier"
            );
            self.push(modifier.clone());
            true
        } else {
            tracing::trace!(modifier = %modifier.name, roll, chance = modifier.chance, "modifier resisted");
            false
        }
    }

    /// Append an entry without rolling
    pub fn push(&mut self, modifier: ModifierData) {
        self.entries.push(ActiveModifier::new(modifier));
    }

    /// Decrement every entry by `delta`, then drop the ones at or below
    /// zero. Survivors keep their relative order. Returns the expired entries.
    pub fn tick(&mut self, delta: f64) -> Vec<ActiveModifier> {
        let mut expired = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());

        for mut entry in self.entries.drain(..) {
            if entry.tick(delta) {
                kept.push(entry);
            } else {
                tracing::debug!(modifier = %entry.source.name, "modifier expired");
                expired.push(entry);
            }
        }

        self.entries = kept;
        expired
    }

    /// Fold every entry, in order, into a copy of `base`
    pub fn fold(&self, base: &HomunStats) -> HomunStats {
        let mut running = *base;
        for entry in &self.entries {
            entry.apply(&mut running);
        }
        running
    }

    /// Sources of the active entries, in order
    pub fn active_modifiers(&self) -> impl Iterator<Item = &ModifierData> {
        self.entries.iter().map(|e| &e.source)
    }

    /// Active entries with their remaining durations
    pub fn entries(&self) -> &[ActiveModifier] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
