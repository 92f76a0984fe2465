//! ECS components for building entities.
//!
//! Components are plain data structs with no methods.
//! All demolition logic lives in blight-sim, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::BuildingKind;
use crate::types::BuildingId;

/// Identity component attached to every building entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Building {
    /// Public slot id, assigned by the world at spawn.
    pub id: BuildingId,
    pub kind: BuildingKind,
}

/// Status flags for a building. Flags combine freely: a building can be
/// abandoned and on fire at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingState {
    /// Occupants have left; the building is eligible for automatic
    /// demolition once nothing else blocks it.
    pub abandoned: bool,
    /// An active fire. Blocks demolition until extinguished.
    pub burning: bool,
    /// Placed by the map author. Never subject to automatic demolition.
    pub original: bool,
}

/// Where the building sits on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    /// Center of the lot in meters from the district origin.
    pub position: Vec2,
    /// Width and depth of the footprint in meters.
    pub footprint: Vec2,
}

impl Lot {
    pub fn new(position: Vec2, footprint: Vec2) -> Self {
        Self {
            position,
            footprint,
        }
    }

    /// Ground area covered by the building in square meters.
    pub fn area(&self) -> f32 {
        self.footprint.x * self.footprint.y
    }
}
