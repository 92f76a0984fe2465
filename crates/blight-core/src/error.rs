//! Error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::BuildingId;

/// The world refused to demolish a building right now.
///
/// Never fatal: the immediate policy retries on a later sweep, the deferred
/// command path drops the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DemolitionBlocked {
    /// An active fire must be extinguished before the lot can be cleared.
    #[error("building {building} is on fire")]
    Burning { building: BuildingId },
}
