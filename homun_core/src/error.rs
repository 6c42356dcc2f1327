//! Errors returned by Homun operations

use crate::types::PartId;
use thiserror::Error;

/// Recoverable failure of a game operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HomunError {
    #[error("Body part {part_id} has no equippable category")]
    InvalidCategory { part_id: PartId },
    #[error("Cannot attack without a core part equipped")]
    MissingCore,
    #[error("No body part with id {0} in catalog")]
    UnknownPartId(PartId),
    #[error("Drop choice {index} out of range ({offered} parts offered)")]
    InvalidDropChoice { index: usize, offered: usize },
}
