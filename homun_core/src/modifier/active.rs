//! ActiveModifier - A ledger entry with remaining duration

use super::ModifierData;
use crate::source::StatSource;
use crate::stats::HomunStats;
use serde::{Deserialize, Serialize};

/// An active instance of a [`ModifierData`] on a Homun
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveModifier {
    /// What this entry applies
    pub source: ModifierData,
    /// Seconds left before expiry
    pub duration_remaining: f64,
}

impl ActiveModifier {
    /// Start a new entry at the modifier's full duration
    pub fn new(source: ModifierData) -> Self {
        let duration_remaining = source.duration;
        ActiveModifier {
            source,
            duration_remaining,
        }
    }

    /// Advance time, returns true if the entry is still active
    pub fn tick(&mut self, delta: f64) -> bool {
        self.duration_remaining -= delta;
        self.is_active()
    }

    /// Check if the entry is still active
    pub fn is_active(&self) -> bool {
        self.duration_remaining > 0.0
    }

    /// Get percentage of duration remaining
    pub fn duration_percent(&self) -> f64 {
        if self.source.duration <= 0.0 {
            return 0.0;
        }
        (self.duration_remaining / self.source.duration * 100.0).clamp(0.0, 100.0)
    }
}

impl StatSource for ActiveModifier {
    fn id(&self) -> &str {
        &self.source.name
    }

    fn apply(&self, stats: &mut HomunStats) {
        self.source.apply_to(stats);
    }
}
