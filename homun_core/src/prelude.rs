//! Prelude module for convenient imports
//!
//! ```rust
//! use homun_core::prelude::*;
//! ```

// Core types
pub use crate::homun::Homun;
pub use crate::stats::{HomunStats, Stat};
pub use crate::types::{PartCategory, PartId};

// Parts and modifiers
pub use crate::modifier::{ActiveModifier, ModifierData};
pub use crate::source::{BodyPart, StatSource};

// Combat
pub use crate::combat::{AttackResult, DamageTaken};
pub use crate::error::HomunError;

// Catalog
pub use crate::catalog::{default_catalog, BodyPartCatalog, DropOffer, PartCatalog};
