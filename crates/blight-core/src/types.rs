//! Fundamental identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle for a building slot in the city world.
///
/// Stable for the building's lifetime. Slots are reused after a building is
/// released, so an id only identifies a particular building while that
/// building exists; holders must drop the id when the release notification
/// arrives.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BuildingId(pub u32);

impl BuildingId {
    /// Raw slot index.
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
