//! Snapshot builder: a serializable view of the standing city.

use blight_core::components::{Building, BuildingState, Lot};
use blight_core::state::{BuildingView, CitySnapshot};

use crate::world::CityWorld;

/// Build a full snapshot of the standing buildings, ascending by id.
pub fn build_snapshot(world: &CityWorld) -> CitySnapshot {
    let mut buildings = Vec::new();
    let mut query = world.ecs().query::<(&Building, &BuildingState, &Lot)>();
    for (_entity, (building, state, lot)) in query.iter() {
        buildings.push(BuildingView {
            id: building.id,
            kind: building.kind,
            lot: *lot,
            abandoned: state.abandoned,
            burning: state.burning,
            original: state.original,
        });
    }
    buildings.sort_by_key(|view| view.id);

    CitySnapshot {
        total: buildings.len(),
        abandoned: buildings.iter().filter(|b| b.abandoned).count(),
        burning: buildings.iter().filter(|b| b.burning).count(),
        demolished_total: world.demolished_total(),
        buildings,
    }
}
