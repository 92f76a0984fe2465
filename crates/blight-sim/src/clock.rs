//! Sweep timer: turns the frame-delta stream into discrete sweep ticks.

use blight_core::constants::SWEEP_INTERVAL_SECS;

/// Accumulates simulation-time deltas and reports when a full sweep interval
/// has elapsed. At most one tick per elapsed interval; whatever accumulated
/// beyond the interval is dropped, not carried over. A paused world (zero
/// delta) never ticks, regardless of elapsed real time.
#[derive(Debug, Default)]
pub struct SweepTimer {
    accumulated: f64,
}

impl SweepTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's simulation-time delta. Returns `true` when a sweep
    /// is due, resetting the accumulator to zero.
    pub fn advance(&mut self, sim_dt: f64) -> bool {
        if sim_dt > 0.0 {
            self.accumulated += sim_dt;
        }
        if self.accumulated >= SWEEP_INTERVAL_SECS {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }
}
