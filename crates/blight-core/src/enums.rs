//! Enumeration types used throughout the demolition system.

use serde::{Deserialize, Serialize};

/// Zoning category of a building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    #[default]
    Residential,
    Commercial,
    Industrial,
    Office,
}

/// How the engine carries out removal of an abandoned building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemolitionPolicy {
    /// Demolish synchronously during the sweep. A blocked candidate aborts
    /// the rest of the sweep; everything still tracked is retried on every
    /// later sweep until it goes through.
    Immediate,
    /// Untrack the candidate up front and queue a one-step demolition
    /// command on the world's own queue. The command re-validates when it
    /// runs; if the building is gone or ineligible by then, nothing happens
    /// and the attempt is not repeated.
    #[default]
    Deferred,
}
