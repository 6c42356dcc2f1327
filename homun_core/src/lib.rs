//! homun_core - Stat aggregation and combat for body-part built creatures
//!
//! This library provides:
//! - Homun: A creature assembled from core, legs, arms and accessory parts
//! - HomunStats: The ten-attribute bundle parts contribute to
//! - TemporalLedger: Timed status modifiers folded into effective stats
//! - Combat: Attack resolution with on-hit modifiers, crits and damage reduction
//! - PartCatalog: Injected part lookup, with a TOML/JSON backed implementation

pub mod catalog;
pub mod combat;
pub mod error;
pub mod homun;
pub mod modifier;
pub mod prelude;
pub mod source;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use catalog::{
    default_catalog, load_catalog, BodyPartCatalog, CatalogError, DropOffer, PartCatalog,
};
pub use combat::{AttackResult, DamageTaken};
pub use error::HomunError;
pub use homun::Homun;
pub use modifier::{ActiveModifier, ModifierData, TemporalLedger};
pub use source::{BodyPart, OnHitModifiers, StatSource};
pub use stats::{HomunStats, Stat};
pub use types::{PartCategory, PartId};
