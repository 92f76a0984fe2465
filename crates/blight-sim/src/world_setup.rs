//! Spawn factories for seeding a district.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use blight_core::components::{BuildingState, Lot};
use blight_core::constants::{DISTRICT_EXTENT_M, LANDMARK_PROBABILITY, LOT_MAX_M, LOT_MIN_M};
use blight_core::enums::BuildingKind;
use blight_core::types::BuildingId;

use crate::world::CityWorld;

/// Seed `count` buildings with random kinds and lots. Roughly one in ten is
/// a map-author landmark, exempt from automatic demolition.
pub fn seed_district(
    world: &mut CityWorld,
    rng: &mut ChaCha8Rng,
    count: usize,
) -> Vec<BuildingId> {
    (0..count)
        .map(|_| spawn_random_building(world, rng))
        .collect()
}

/// Spawn one building at a random lot.
pub fn spawn_random_building(world: &mut CityWorld, rng: &mut ChaCha8Rng) -> BuildingId {
    let kind = random_kind(rng);
    let position = Vec2::new(
        rng.gen_range(-DISTRICT_EXTENT_M..DISTRICT_EXTENT_M),
        rng.gen_range(-DISTRICT_EXTENT_M..DISTRICT_EXTENT_M),
    );
    let footprint = Vec2::new(
        rng.gen_range(LOT_MIN_M..LOT_MAX_M),
        rng.gen_range(LOT_MIN_M..LOT_MAX_M),
    );
    let state = BuildingState {
        original: rng.gen_bool(LANDMARK_PROBABILITY),
        ..BuildingState::default()
    };
    world.spawn_building(kind, Lot::new(position, footprint), state)
}

fn random_kind(rng: &mut ChaCha8Rng) -> BuildingKind {
    match rng.gen_range(0..4) {
        0 => BuildingKind::Residential,
        1 => BuildingKind::Commercial,
        2 => BuildingKind::Industrial,
        _ => BuildingKind::Office,
    }
}
