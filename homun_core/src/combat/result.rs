//! AttackResult - Outcome of an attack

use serde::{Deserialize, Serialize};

/// Result of one Homun attacking another
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttackResult {
    /// Attacker's effective attack at the moment of the hit
    pub base_damage: f64,
    /// Whether the critical roll succeeded
    pub is_critical: bool,
    /// Damage sent to the target, after crit
    pub damage_dealt: f64,
    /// Enemy-inflicting modifiers that landed on the target
    pub enemy_modifiers_applied: Vec<String>,
    /// Self-inflicting modifiers that landed on the attacker
    pub self_modifiers_applied: Vec<String>,
    /// What the target actually took
    pub taken: DamageTaken,
}

impl AttackResult {
    /// Create a new empty attack result
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.is_critical {
            parts.push(format!("CRIT {:.1}", self.damage_dealt));
        } else {
            parts.push(format!("{:.1} damage", self.damage_dealt));
        }

        if self.taken.mitigated_amount > 0.0 {
            parts.push(format!("{:.1} reduced", self.taken.mitigated_amount));
        }

        if !self.enemy_modifiers_applied.is_empty() {
            parts.push(format!("inflicted {}", self.enemy_modifiers_applied.join("/")));
        }

        if !self.self_modifiers_applied.is_empty() {
            parts.push(format!("gained {}", self.self_modifiers_applied.join("/")));
        }

        parts.join(", ")
    }
}

/// Damage received by a Homun
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageTaken {
    /// Incoming damage before reduction
    pub raw_amount: f64,
    /// Amount removed by damage reduction
    pub mitigated_amount: f64,
    /// Amount subtracted from health
    pub final_amount: f64,
    pub health_before: f64,
    pub health_after: f64,
}

impl DamageTaken {
    /// Get mitigation percentage
    pub fn mitigation_percent(&self) -> f64 {
        if self.raw_amount <= 0.0 {
            return 0.0;
        }
        self.mitigated_amount / self.raw_amount * 100.0
    }

    /// Get health change (negative when damaged)
    pub fn health_change(&self) -> f64 {
        self.health_after - self.health_before
    }
}
