//! Commands executed by the city world's own queue.
//!
//! Commands are queued at any point during a frame and processed in FIFO
//! order at the next `step()` boundary. There is no result channel back to
//! the enqueuer; a command that no longer applies does nothing.

use serde::{Deserialize, Serialize};

use crate::types::BuildingId;

/// All deferred world actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorldCommand {
    /// Mark the building abandoned.
    Abandon { building: BuildingId },
    /// Clear the abandoned flag (new occupants moved in).
    Reoccupy { building: BuildingId },
    /// Start a fire in the building.
    Ignite { building: BuildingId },
    /// Put out the fire.
    Extinguish { building: BuildingId },
    /// Remove the building from the world. Re-validates at execution time
    /// that the slot still holds an abandoned, eligible building (slot ids
    /// are reused); drops silently otherwise.
    Demolish { building: BuildingId },
}
