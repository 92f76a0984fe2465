//! Tuning parameters for the demolition system and the demo district.

// --- Sweeping ---

/// Simulation seconds between demolition sweeps.
pub const SWEEP_INTERVAL_SECS: f64 = 1.0;

// --- District seeding ---

/// Half-extent of the seeded district in meters; lots land in
/// `[-DISTRICT_EXTENT_M, DISTRICT_EXTENT_M]` on both axes.
pub const DISTRICT_EXTENT_M: f32 = 2_000.0;

/// Smallest lot footprint edge in meters.
pub const LOT_MIN_M: f32 = 8.0;

/// Largest lot footprint edge in meters.
pub const LOT_MAX_M: f32 = 40.0;

/// Chance that a seeded building is a map-author landmark, exempt from
/// automatic demolition.
pub const LANDMARK_PROBABILITY: f64 = 0.1;

/// Number of buildings the demo district starts with.
pub const DEFAULT_DISTRICT_SIZE: usize = 48;
