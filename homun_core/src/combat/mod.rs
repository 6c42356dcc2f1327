//! Combat resolution - Attacks between Homuns

mod resolution;
mod result;

pub use resolution::{apply_damage, resolve_attack, resolve_attack_with_rng};
pub use result::{AttackResult, DamageTaken};
