//! City snapshot — a serializable view of the world for reporting and tests.

use serde::{Deserialize, Serialize};

use crate::components::Lot;
use crate::enums::BuildingKind;
use crate::types::BuildingId;

/// Aggregate view of the city, built after any frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitySnapshot {
    /// Buildings currently standing.
    pub total: usize,
    /// Standing buildings with the abandoned flag set.
    pub abandoned: usize,
    /// Standing buildings with an active fire.
    pub burning: usize,
    /// Buildings removed by the demolition executor since world creation.
    pub demolished_total: u64,
    /// Per-building views, ascending by id.
    pub buildings: Vec<BuildingView>,
}

/// One standing building.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BuildingView {
    pub id: BuildingId,
    pub kind: BuildingKind,
    pub lot: Lot,
    pub abandoned: bool,
    pub burning: bool,
    pub original: bool,
}
