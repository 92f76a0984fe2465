//! City world and automatic demolition of abandoned buildings.
//!
//! `CityWorld` owns the hecs-backed building store, the notification bus,
//! and the deferred command queue; `DemolitionEngine` watches the building
//! population and clears abandoned buildings once per simulated second.
//! Completely headless, enabling deterministic testing.

pub mod clock;
pub mod demolition;
pub mod engine;
pub mod roster;
pub mod snapshot;
pub mod world;
pub mod world_setup;

pub use blight_core as core;
pub use engine::{DemolitionConfig, DemolitionEngine};
pub use world::CityWorld;
