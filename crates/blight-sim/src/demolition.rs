//! Demolition executor: the only path that releases buildings.

use tracing::debug;

use blight_core::error::DemolitionBlocked;
use blight_core::types::BuildingId;

use crate::world::CityWorld;

/// Demolish one building, re-validating against the world's current state.
///
/// Returns `Ok(true)` when the building was released, `Ok(false)` when the
/// slot is already empty, and `Err` when the world's eligibility check
/// refuses, in which case no removal side effect occurs. The release emits
/// the world's `Released` notification, which is what brings the roster
/// back in line after a demolition.
pub fn demolish(world: &mut CityWorld, id: BuildingId) -> Result<bool, DemolitionBlocked> {
    let Some(state) = world.building_state(id) else {
        debug!(building = %id, "demolition target no longer exists");
        return Ok(false);
    };
    world.check_bulldoze(id, &state)?;
    world.release_building(id);
    world.record_demolition();
    Ok(true)
}
