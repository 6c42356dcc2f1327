//! Timed status modifiers and the ledger that tracks them

mod active;
mod data;
mod ledger;

pub use active::ActiveModifier;
pub use data::ModifierData;
pub use ledger::TemporalLedger;
