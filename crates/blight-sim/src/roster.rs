//! Tracked-building roster: which buildings the demolition engine watches.

use std::collections::BTreeSet;

use blight_core::events::BuildingEvent;
use blight_core::types::BuildingId;

use crate::world::{CityWorld, Subscription};

/// The set of buildings currently known to exist and subject to automatic
/// demolition. Kept in sync with the world's creation/release notifications.
/// Iteration order is ascending by id.
pub struct BuildingRoster {
    tracked: BTreeSet<BuildingId>,
    subscription: Option<Subscription>,
}

impl BuildingRoster {
    /// Seed the roster and subscribe to the world's notification bus.
    /// `existing` comes from a full scan taken before any event can arrive.
    pub fn subscribe(
        world: &mut CityWorld,
        existing: impl IntoIterator<Item = BuildingId>,
    ) -> Self {
        Self {
            tracked: existing.into_iter().collect(),
            subscription: Some(world.subscribe()),
        }
    }

    /// Drain pending notifications and apply them in order. Does nothing
    /// after `teardown`.
    pub fn pump(&mut self, world: &mut CityWorld) {
        let Some(subscription) = &self.subscription else {
            return;
        };
        for event in world.drain_events(subscription) {
            match event {
                BuildingEvent::Created { building } => self.note_created(building),
                BuildingEvent::Released { building } => self.note_released(building),
            }
        }
    }

    /// Track a newly created building. Inserting an id that is already
    /// tracked keeps a single entry.
    pub fn note_created(&mut self, id: BuildingId) {
        self.tracked.insert(id);
    }

    /// Forget a released building. No-op when the id is not tracked: the
    /// engine may have untracked it ahead of the notification, or the
    /// release may concern a building this roster never covered.
    pub fn note_released(&mut self, id: BuildingId) {
        self.tracked.remove(&id);
    }

    /// Remove an id ahead of its release notification. Returns whether it
    /// was actually tracked.
    pub fn untrack(&mut self, id: BuildingId) -> bool {
        self.tracked.remove(&id)
    }

    pub fn contains(&self, id: BuildingId) -> bool {
        self.tracked.contains(&id)
    }

    /// Ordered copy of the tracked set, safe to iterate while the roster is
    /// mutated afterwards.
    pub fn snapshot(&self) -> Vec<BuildingId> {
        self.tracked.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Unsubscribe from the world and discard the tracked set. After this
    /// returns, no notification can reach this roster.
    pub fn teardown(&mut self, world: &mut CityWorld) {
        if let Some(subscription) = self.subscription.take() {
            world.unsubscribe(subscription);
        }
        self.tracked.clear();
    }
}
