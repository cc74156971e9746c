//! Session state machine - where the player is and what they carry.

use serde::Serialize;

use super::{Action, ActionKind, MoveResult, Outcome, PickUpResult, SessionEnd, Turn};
use crate::entities::{Direction, ItemId, Room, RoomId, SessionId};
use crate::error::{GameError, WorldError};
use crate::world_state::{WorldGraph, REQUIRED_ITEMS};

/// Mutable state of one play-through.
///
/// A session borrows the world read-only and owns everything else. It is
/// created in the start room with an empty inventory and ends when the
/// terminal room is resolved or the player exits.
#[derive(Debug, Clone)]
pub struct Session<'w> {
    id: SessionId,
    world: &'w WorldGraph,
    current: &'w Room,
    /// Collection order, no duplicates.
    inventory: Vec<ItemId>,
    ended: Option<SessionEnd>,
}

/// Serializable view of a session, used for logging.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub room: RoomId,
    pub inventory: Vec<ItemId>,
    pub ended: Option<SessionEnd>,
}

impl<'w> Session<'w> {
    /// Start a new session in the world's start room.
    pub fn new(world: &'w WorldGraph) -> Result<Self, WorldError> {
        let current = world.room(world.start_room())?;
        let id = SessionId::new();
        tracing::info!(session = %id, room = %current.id, "Session started");

        Ok(Self {
            id,
            world,
            current,
            inventory: Vec::with_capacity(REQUIRED_ITEMS),
            ended: None,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn world(&self) -> &'w WorldGraph {
        self.world
    }

    pub fn current_room(&self) -> &'w RoomId {
        &self.current.id
    }

    pub fn room(&self) -> &'w Room {
        self.current
    }

    /// Collected items in the order they were picked up.
    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    pub fn holds(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }

    /// How the session ended, if it has.
    pub fn ending(&self) -> Option<SessionEnd> {
        self.ended
    }

    pub fn is_over(&self) -> bool {
        self.ended.is_some()
    }

    /// The item in the current room that has not been collected yet.
    pub fn uncollected_item(&self) -> Option<&'w ItemId> {
        self.current.item.as_ref().filter(|item| !self.holds(item))
    }

    /// Legal actions from the current state.
    ///
    /// Moves come first in North, South, East, West order, then the pick-up
    /// when the room still offers an item, then exit. A finished session, or
    /// one standing in the terminal room, has no actions.
    pub fn list_available_actions(&self) -> Vec<Action> {
        if self.is_over() || self.is_in_terminal_room() {
            return Vec::new();
        }

        let mut actions: Vec<Action> = self
            .current
            .exits()
            .map(|(direction, destination)| {
                Action::new(
                    format!("Go {} → {}", direction, destination),
                    ActionKind::Move(direction),
                )
            })
            .collect();

        if let Some(item) = self.uncollected_item() {
            actions.push(Action::new(
                format!("Pick up {}", item),
                ActionKind::PickUp(item.clone()),
            ));
        }

        actions.push(Action::new("Exit Game", ActionKind::Exit));
        actions
    }

    /// Move through the exit in `direction`.
    ///
    /// Entering the terminal room does not resolve the encounter; callers
    /// check [`Session::is_in_terminal_room`] and call
    /// [`Session::resolve_encounter`], or use [`Session::apply`] which does both.
    pub fn move_to(&mut self, direction: Direction) -> Result<MoveResult, GameError> {
        self.ensure_active()?;

        let current: &'w Room = self.current;
        let destination = current
            .exit(direction)
            .ok_or_else(|| GameError::InvalidDirection {
                room: current.id.clone(),
                direction,
            })?;
        let next = self.world.room(destination)?;

        let result = MoveResult {
            direction,
            from: current.id.clone(),
            to: next.id.clone(),
        };
        self.current = next;

        tracing::debug!(
            session = %self.id,
            from = %result.from,
            to = %result.to,
            %direction,
            "Player moved"
        );
        Ok(result)
    }

    /// Collect `item` from the current room.
    ///
    /// Picking up an item that is already held changes nothing and reports
    /// [`PickUpResult::AlreadyCollected`].
    pub fn pick_up(&mut self, item: &ItemId) -> Result<PickUpResult, GameError> {
        self.ensure_active()?;

        if !self.current.offers(item) {
            return Err(GameError::NothingToCollect {
                room: self.current.id.clone(),
                item: item.clone(),
            });
        }
        if self.holds(item) {
            return Ok(PickUpResult::AlreadyCollected(item.clone()));
        }

        self.inventory.push(item.clone());
        let held = self.inventory.len();
        let complete = held == REQUIRED_ITEMS;

        tracing::debug!(session = %self.id, %item, held, "Item collected");
        if complete {
            tracing::info!(session = %self.id, "All items collected");
        }

        Ok(PickUpResult::Collected {
            item: item.clone(),
            held,
            complete,
        })
    }

    pub fn has_all_items(&self) -> bool {
        self.inventory.len() == REQUIRED_ITEMS
    }

    pub fn is_in_terminal_room(&self) -> bool {
        self.current.id == *self.world.terminal_room()
    }

    /// Resolve the final encounter if the player stands in the terminal room.
    ///
    /// Returns `None` outside the terminal room. Otherwise the session ends
    /// with a win when every item is held and a loss when any is missing.
    pub fn resolve_encounter(&mut self) -> Option<Outcome> {
        if !self.is_in_terminal_room() {
            return None;
        }
        match self.ended {
            Some(SessionEnd::Encounter(outcome)) => return Some(outcome),
            Some(SessionEnd::Quit) => return None,
            None => {}
        }

        let outcome = if self.has_all_items() {
            Outcome::Win
        } else {
            Outcome::Lose
        };
        self.ended = Some(SessionEnd::Encounter(outcome));

        tracing::info!(
            session = %self.id,
            ?outcome,
            held = self.inventory.len(),
            "Encounter resolved"
        );
        Some(outcome)
    }

    /// Leave the game.
    pub fn exit(&mut self) -> Result<SessionEnd, GameError> {
        self.ensure_active()?;
        self.ended = Some(SessionEnd::Quit);
        tracing::info!(session = %self.id, "Player exited");
        Ok(SessionEnd::Quit)
    }

    /// Execute one action, resolving the encounter when a move lands in the
    /// terminal room.
    pub fn apply(&mut self, action: &ActionKind) -> Result<Turn, GameError> {
        match action {
            ActionKind::Move(direction) => {
                let result = self.move_to(*direction)?;
                let outcome = self.resolve_encounter();
                Ok(Turn::Moved { result, outcome })
            }
            ActionKind::PickUp(item) => self.pick_up(item).map(Turn::PickedUp),
            ActionKind::Exit => {
                self.exit()?;
                Ok(Turn::Exited)
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            room: self.current.id.clone(),
            inventory: self.inventory.clone(),
            ended: self.ended,
        }
    }

    /// Mutations are refused once the session has ended and also while the
    /// player stands in the terminal room, resolved or not.
    fn ensure_active(&self) -> Result<(), GameError> {
        if self.is_over() || self.is_in_terminal_room() {
            Err(GameError::SessionOver)
        } else {
            Ok(())
        }
    }
}
