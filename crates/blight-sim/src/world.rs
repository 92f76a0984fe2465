//! The city world: building store, notification bus, and command queue.
//!
//! Everything here runs on one cooperative loop. Notifications are buffered
//! per subscriber and drained in FIFO order; commands queued during a frame
//! execute at the next `step()` boundary.

use std::collections::{HashMap, VecDeque};

use hecs::{Entity, World};
use tracing::{debug, info};

use blight_core::commands::WorldCommand;
use blight_core::components::{Building, BuildingState, Lot};
use blight_core::enums::BuildingKind;
use blight_core::error::DemolitionBlocked;
use blight_core::events::BuildingEvent;
use blight_core::types::BuildingId;

use crate::demolition;

/// Receipt for a notification-bus subscription.
///
/// Not cloneable: `unsubscribe` consumes it, so once a subscriber has torn
/// down there is no handle left to read events through.
#[derive(Debug)]
pub struct Subscription {
    token: u32,
}

/// The city world. Buildings are hecs entities indexed by reusable slot ids.
pub struct CityWorld {
    ecs: World,
    slots: Vec<Option<Entity>>,
    free_slots: Vec<BuildingId>,
    mailboxes: HashMap<u32, Vec<BuildingEvent>>,
    next_token: u32,
    command_queue: VecDeque<WorldCommand>,
    demolished_total: u64,
}

impl CityWorld {
    pub fn new() -> Self {
        Self {
            ecs: World::new(),
            slots: Vec::new(),
            free_slots: Vec::new(),
            mailboxes: HashMap::new(),
            next_token: 0,
            command_queue: VecDeque::new(),
            demolished_total: 0,
        }
    }

    // --- Building store ---

    /// Spawn a building, reusing a freed slot id when one is available.
    /// Emits `Created` to every subscriber.
    pub fn spawn_building(
        &mut self,
        kind: BuildingKind,
        lot: Lot,
        state: BuildingState,
    ) -> BuildingId {
        let id = match self.free_slots.pop() {
            Some(id) => id,
            None => {
                let id = BuildingId(self.slots.len() as u32);
                self.slots.push(None);
                id
            }
        };
        let entity = self.ecs.spawn((Building { id, kind }, lot, state));
        self.slots[id.index() as usize] = Some(entity);
        self.emit(BuildingEvent::Created { building: id });
        debug!(building = %id, "building spawned");
        id
    }

    /// Remove a building from the world, freeing its slot for reuse and
    /// emitting `Released`. Returns `false` when the slot is already empty.
    pub fn release_building(&mut self, id: BuildingId) -> bool {
        let Some(entity) = self.entity(id) else {
            return false;
        };
        let _ = self.ecs.despawn(entity);
        self.slots[id.index() as usize] = None;
        self.free_slots.push(id);
        self.emit(BuildingEvent::Released { building: id });
        debug!(building = %id, "building released");
        true
    }

    /// Entity currently occupying the slot, if any.
    pub fn entity(&self, id: BuildingId) -> Option<Entity> {
        self.slots.get(id.index() as usize).copied().flatten()
    }

    pub fn contains(&self, id: BuildingId) -> bool {
        self.entity(id).is_some()
    }

    /// Current status flags of the building, `None` for an empty slot.
    pub fn building_state(&self, id: BuildingId) -> Option<BuildingState> {
        let entity = self.entity(id)?;
        self.ecs.get::<&BuildingState>(entity).ok().map(|state| *state)
    }

    /// All standing buildings with their flags, ascending by id.
    pub fn buildings(&self) -> Vec<(BuildingId, BuildingState)> {
        let mut query = self.ecs.query::<(&Building, &BuildingState)>();
        let mut out: Vec<_> = query
            .iter()
            .map(|(_, (building, state))| (building.id, *state))
            .collect();
        out.sort_by_key(|(id, _)| *id);
        out
    }

    /// Read-only access to the underlying component store.
    pub fn ecs(&self) -> &World {
        &self.ecs
    }

    /// Whether the building may be demolished right now. The world is the
    /// authority here: a refusal is not an error to surface, it only defers
    /// or drops the attempt.
    pub fn check_bulldoze(
        &self,
        id: BuildingId,
        state: &BuildingState,
    ) -> Result<(), DemolitionBlocked> {
        if state.burning {
            return Err(DemolitionBlocked::Burning { building: id });
        }
        Ok(())
    }

    /// Buildings removed by the demolition executor since world creation.
    pub fn demolished_total(&self) -> u64 {
        self.demolished_total
    }

    pub(crate) fn record_demolition(&mut self) {
        self.demolished_total += 1;
    }

    // --- Notification bus ---

    /// Open a mailbox for lifecycle notifications. Events emitted from now
    /// on are buffered until drained.
    pub fn subscribe(&mut self) -> Subscription {
        let token = self.next_token;
        self.next_token += 1;
        self.mailboxes.insert(token, Vec::new());
        info!(token, "subscriber attached");
        Subscription { token }
    }

    /// Take all buffered events for this subscription, oldest first.
    pub fn drain_events(&mut self, subscription: &Subscription) -> Vec<BuildingEvent> {
        self.mailboxes
            .get_mut(&subscription.token)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// Close the mailbox. No event is delivered for this subscription after
    /// this returns.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.mailboxes.remove(&subscription.token);
        info!(token = subscription.token, "subscriber detached");
    }

    fn emit(&mut self, event: BuildingEvent) {
        for mailbox in self.mailboxes.values_mut() {
            mailbox.push(event);
        }
    }

    // --- Command queue ---

    /// Queue a command for execution at the next `step()` boundary.
    pub fn queue_command(&mut self, command: WorldCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = WorldCommand>) {
        self.command_queue.extend(commands);
    }

    /// Commands waiting for the next step.
    pub fn pending_commands(&self) -> usize {
        self.command_queue.len()
    }

    /// Process all queued commands in FIFO order.
    pub fn step(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Commands targeting an empty slot do nothing.
    fn handle_command(&mut self, command: WorldCommand) {
        match command {
            WorldCommand::Abandon { building } => {
                self.set_flags(building, |state| state.abandoned = true);
            }
            WorldCommand::Reoccupy { building } => {
                self.set_flags(building, |state| state.abandoned = false);
            }
            WorldCommand::Ignite { building } => {
                self.set_flags(building, |state| state.burning = true);
            }
            WorldCommand::Extinguish { building } => {
                self.set_flags(building, |state| state.burning = false);
            }
            WorldCommand::Demolish { building } => match self.building_state(building) {
                // Slot ids are reused, so the command must confirm the slot
                // still holds an abandoned building before touching it.
                Some(state) if state.abandoned => {
                    match demolition::demolish(self, building) {
                        Ok(true) => info!(building = %building, "deferred demolition executed"),
                        Ok(false) => {}
                        Err(reason) => {
                            debug!(building = %building, %reason, "deferred demolition dropped")
                        }
                    }
                }
                Some(_) => debug!(building = %building, "demolition target no longer abandoned"),
                None => debug!(building = %building, "demolition target gone"),
            },
        }
    }

    fn set_flags(&mut self, id: BuildingId, mutate: impl FnOnce(&mut BuildingState)) {
        let Some(entity) = self.entity(id) else {
            return;
        };
        if let Ok(mut state) = self.ecs.get::<&mut BuildingState>(entity) {
            mutate(&mut state);
        }
    }
}

impl Default for CityWorld {
    fn default() -> Self {
        Self::new()
    }
}
