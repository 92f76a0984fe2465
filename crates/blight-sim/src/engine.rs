//! Demolition engine: scans tracked buildings once per simulated second and
//! clears the abandoned ones.
//!
//! The engine never mutates the world outside the demolition executor; the
//! world's release notification is the only thing that untracks a demolished
//! building under the immediate policy, while the deferred policy untracks
//! up front and hands the removal to the world's own command queue.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use blight_core::commands::WorldCommand;
use blight_core::enums::DemolitionPolicy;
use blight_core::events::DemolitionNotice;
use blight_core::types::BuildingId;

use crate::clock::SweepTimer;
use crate::demolition;
use crate::roster::BuildingRoster;
use crate::world::CityWorld;

/// Configuration for the demolition engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemolitionConfig {
    pub policy: DemolitionPolicy,
}

/// Running counters, reported when the engine stops.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DemolitionStats {
    /// Sweeps that ran.
    pub sweeps: u64,
    /// Abandoned candidates seen across all sweeps.
    pub candidates: u64,
    /// Buildings demolished synchronously (immediate policy).
    pub demolished: u64,
    /// Demolitions handed to the world's command queue (deferred policy).
    pub queued: u64,
    /// Candidates refused by the world's eligibility check.
    pub blocked: u64,
}

/// Watches the building population and removes abandoned buildings.
pub struct DemolitionEngine {
    config: DemolitionConfig,
    roster: BuildingRoster,
    timer: SweepTimer,
    stats: DemolitionStats,
    notices: Vec<DemolitionNotice>,
}

impl DemolitionEngine {
    /// Scan the world for standing, non-landmark buildings, seed the roster
    /// from the result, and subscribe to lifecycle notifications. The seed
    /// completes before this returns, so no sweep can observe a partial
    /// roster.
    pub fn start(config: DemolitionConfig, world: &mut CityWorld) -> Self {
        let existing = world
            .buildings()
            .into_iter()
            .filter(|(_, state)| !state.original)
            .map(|(id, _)| id);
        let roster = BuildingRoster::subscribe(world, existing);
        info!(tracked = roster.len(), policy = ?config.policy, "demolition engine started");
        Self {
            config,
            roster,
            timer: SweepTimer::new(),
            stats: DemolitionStats::default(),
            notices: Vec::new(),
        }
    }

    /// Drive the engine for one host frame. Notifications are pumped every
    /// frame; the sweep runs only when a full simulated second has
    /// accumulated, so a paused world keeps its roster fresh without ever
    /// sweeping. Only the simulation-time delta feeds the timer.
    pub fn on_update(&mut self, world: &mut CityWorld, _real_dt: f64, sim_dt: f64) {
        self.roster.pump(world);
        if self.timer.advance(sim_dt) {
            self.sweep(world);
        }
    }

    /// Unsubscribe from the world and discard the tracked set. No
    /// notification is delivered afterwards.
    pub fn stop(&mut self, world: &mut CityWorld) {
        self.roster.teardown(world);
        info!(stats = ?self.stats, "demolition engine stopped");
    }

    /// Drain feedback accumulated since the last call.
    pub fn drain_notices(&mut self) -> Vec<DemolitionNotice> {
        std::mem::take(&mut self.notices)
    }

    pub fn roster(&self) -> &BuildingRoster {
        &self.roster
    }

    pub fn stats(&self) -> DemolitionStats {
        self.stats
    }

    /// One reconciliation pass: collect tracked buildings whose abandoned
    /// flag is set (ascending id order), then remove them per the configured
    /// policy.
    fn sweep(&mut self, world: &mut CityWorld) {
        self.stats.sweeps += 1;

        let mut candidates = Vec::new();
        for id in self.roster.snapshot() {
            if let Some(state) = world.building_state(id) {
                if state.abandoned {
                    candidates.push(id);
                }
            }
        }
        if candidates.is_empty() {
            return;
        }

        self.stats.candidates += candidates.len() as u64;
        debug!(count = candidates.len(), "abandoned buildings found");
        match self.config.policy {
            DemolitionPolicy::Immediate => self.demolish_now(world, &candidates),
            DemolitionPolicy::Deferred => self.queue_demolitions(world, &candidates),
        }
    }

    /// Immediate policy: demolish in candidate order. A refusal ends the
    /// sweep; everything left stays tracked and is rediscovered next sweep.
    fn demolish_now(&mut self, world: &mut CityWorld, candidates: &[BuildingId]) {
        for &id in candidates {
            match demolition::demolish(world, id) {
                Ok(true) => {
                    self.stats.demolished += 1;
                    self.notices
                        .push(DemolitionNotice::Demolished { building: id });
                    info!(building = %id, "demolished abandoned building");
                }
                Ok(false) => {}
                Err(reason) => {
                    self.stats.blocked += 1;
                    self.notices
                        .push(DemolitionNotice::Blocked { building: id, reason });
                    debug!(building = %id, %reason, "demolition refused, sweep aborted");
                    break;
                }
            }
        }
    }

    /// Deferred policy: untrack each candidate and hand the demolition to
    /// the world's command queue. The command re-validates when it runs; a
    /// building it passes over is not tracked again.
    fn queue_demolitions(&mut self, world: &mut CityWorld, candidates: &[BuildingId]) {
        for &id in candidates {
            if self.roster.untrack(id) {
                world.queue_command(WorldCommand::Demolish { building: id });
                self.stats.queued += 1;
                self.notices.push(DemolitionNotice::Queued { building: id });
                debug!(building = %id, "demolition queued");
            }
        }
    }
}
