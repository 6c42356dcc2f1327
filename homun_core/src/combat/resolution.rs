//! Attack resolution - Apply one Homun's hit to another

use super::result::{AttackResult, DamageTaken};
use crate::error::HomunError;
use crate::homun::Homun;
use rand::Rng;

/// Resolve an attack (RNG handled internally)
pub fn resolve_attack(attacker: &mut Homun, target: &mut Homun) -> Result<AttackResult, HomunError> {
    let mut rng = rand::thread_rng();
    resolve_attack_with_rng(attacker, target, &mut rng)
}

/// Resolve an attack with a provided RNG (for deterministic testing)
///
/// 1. Roll the attacker's core on-hit modifiers: enemy list onto the
///    target, then self list onto the attacker
/// 2. Base damage is the attacker's effective attack
/// 3. Roll crit against effective critical chance; on success scale by
///    effective critical damage / 100
/// 4. Deliver to the target through damage reduction
///
/// Fails with [`HomunError::MissingCore`] before touching either side if
/// the attacker has no core part.
pub fn resolve_attack_with_rng(
    attacker: &mut Homun,
    target: &mut Homun,
    rng: &mut impl Rng,
) -> Result<AttackResult, HomunError> {
    let on_hit = attacker.on_hit_modifiers()?.clone();
    let mut result = AttackResult::new();

    for modifier in &on_hit.enemy_inflicting {
        if target.receive_temporal_status_with_rng(modifier, rng) {
            result.enemy_modifiers_applied.push(modifier.name.clone());
        }
    }

    for modifier in &on_hit.self_inflicting {
        if attacker.receive_temporal_status_with_rng(modifier, rng) {
            result.self_modifiers_applied.push(modifier.name.clone());
        }
    }

    let stats = attacker.effective_stats();
    result.base_damage = stats.attack;

    let mut damage = stats.attack;
    if rng.gen::<f64>() < stats.critical_chance {
        damage *= stats.critical_damage / 100.0;
        result.is_critical = true;
    }
    result.damage_dealt = damage;

    tracing::debug!(
        attacker = %attacker.name(),
        target = %target.name(),
        damage,
        critical = result.is_critical,
        "dealing damage"
    );

    result.taken = target.receive_damage(damage);
    Ok(result)
}

/// Apply incoming damage to a Homun
///
/// Damage is reduced by `effective damage_reduction / 100` and subtracted
/// from health. Health is not floored, so it can go below zero.
pub fn apply_damage(defender: &mut Homun, amount: f64) -> DamageTaken {
    let reduction = defender.effective_stats().damage_reduction;
    let mitigated = amount * (reduction / 100.0);
    let final_amount = amount - mitigated;

    let health_before = defender.health();
    defender.base_stats_mut().health -= final_amount;
    let health_after = defender.health();

    tracing::debug!(
        homun = %defender.name(),
        received = final_amount,
        health = health_after,
        "received damage"
    );

    DamageTaken {
        raw_amount: amount,
        mitigated_amount: mitigated,
        final_amount,
        health_before,
        health_after,
    }
}
