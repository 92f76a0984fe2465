//! Headless demo: seed a district, let the scripted scenario abandon and
//! burn buildings, and watch the demolition engine clear the blight.
//!
//! Runs a fixed number of simulated seconds at a fixed frame rate, then
//! prints the final city snapshot as JSON. Log verbosity follows `RUST_LOG`.

mod scenario;

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blight_core::constants::DEFAULT_DISTRICT_SIZE;
use blight_sim::engine::{DemolitionConfig, DemolitionEngine};
use blight_sim::snapshot;
use blight_sim::world::CityWorld;
use blight_sim::world_setup;

/// Frames per simulated second.
const FRAME_RATE: u32 = 30;

/// Simulated seconds the demo runs for.
const RUN_SECS: u32 = 90;

/// Seed for the district layout and the scenario script.
const SEED: u64 = 1977;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut world = CityWorld::new();
    let seeded = world_setup::seed_district(&mut world, &mut rng, DEFAULT_DISTRICT_SIZE);
    info!(buildings = seeded.len(), seed = SEED, "district seeded");

    let mut engine = DemolitionEngine::start(DemolitionConfig::default(), &mut world);

    let frame_dt = 1.0 / f64::from(FRAME_RATE);
    for frame in 0..(RUN_SECS * FRAME_RATE) {
        scenario::drive(&mut world, &mut rng, frame);
        world.step();
        engine.on_update(&mut world, frame_dt, frame_dt);
        for notice in engine.drain_notices() {
            info!(?notice, frame, "sweep notice");
        }
    }
    engine.stop(&mut world);

    let snapshot = snapshot::build_snapshot(&world);
    info!(
        standing = snapshot.total,
        demolished = snapshot.demolished_total,
        "run complete"
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
