//! Scripted district events.
//!
//! Once per simulated second, one random standing building may be
//! abandoned, reoccupied, set on fire, or have its fire put out, all
//! through the world's command queue, the same way any other subsystem
//! would mutate the city.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use blight_core::commands::WorldCommand;
use blight_sim::world::CityWorld;

/// Frames between scenario rolls (one simulated second at 30 Hz).
const ROLL_INTERVAL_FRAMES: u32 = 30;

pub fn drive(world: &mut CityWorld, rng: &mut ChaCha8Rng, frame: u32) {
    if frame % ROLL_INTERVAL_FRAMES != 0 {
        return;
    }
    let buildings = world.buildings();
    if buildings.is_empty() {
        return;
    }
    let (id, state) = buildings[rng.gen_range(0..buildings.len())];

    let roll: f64 = rng.gen();
    let command = if state.burning && roll < 0.5 {
        WorldCommand::Extinguish { building: id }
    } else if !state.abandoned && roll < 0.35 {
        WorldCommand::Abandon { building: id }
    } else if state.abandoned && roll < 0.45 {
        WorldCommand::Ignite { building: id }
    } else if state.abandoned && roll < 0.55 {
        WorldCommand::Reoccupy { building: id }
    } else {
        return;
    };
    world.queue_command(command);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    use blight_core::components::{BuildingState, Lot};
    use blight_core::enums::BuildingKind;
    use blight_sim::world_setup;

    #[test]
    fn test_drive_only_rolls_on_second_boundaries() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut world = CityWorld::new();
        world.spawn_building(
            BuildingKind::Residential,
            Lot::default(),
            BuildingState::default(),
        );

        for frame in 1..ROLL_INTERVAL_FRAMES {
            drive(&mut world, &mut rng, frame);
        }
        assert_eq!(world.pending_commands(), 0);
    }

    #[test]
    fn test_drive_eventually_queues_commands() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut world = CityWorld::new();
        world_setup::seed_district(&mut world, &mut rng, 16);

        let mut queued = 0;
        for second in 0..200 {
            drive(&mut world, &mut rng, second * ROLL_INTERVAL_FRAMES);
            queued += world.pending_commands();
            world.step();
        }
        assert!(queued > 0, "200 rolls should queue at least one command");
    }

    #[test]
    fn test_drive_survives_empty_city() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut world = CityWorld::new();
        drive(&mut world, &mut rng, 0);
        assert_eq!(world.pending_commands(), 0);
    }
}
