//! Events emitted by the world and by the demolition engine.

use serde::{Deserialize, Serialize};

use crate::error::DemolitionBlocked;
use crate::types::BuildingId;

/// Lifecycle notifications broadcast by the city world to every subscriber.
///
/// Delivered in emission order. A slot id that is reused always delivers its
/// `Released` before the reusing `Created`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BuildingEvent {
    /// A building now occupies this slot.
    Created { building: BuildingId },
    /// The building in this slot was removed from the world.
    Released { building: BuildingId },
}

/// Per-sweep feedback from the demolition engine, drained by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DemolitionNotice {
    /// Demolished synchronously during the sweep.
    Demolished { building: BuildingId },
    /// Untracked and handed to the world's command queue for a later step.
    Queued { building: BuildingId },
    /// The world refused the demolition; the sweep moved on.
    Blocked {
        building: BuildingId,
        reason: DemolitionBlocked,
    },
}
