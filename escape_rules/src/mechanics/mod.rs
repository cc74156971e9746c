//! Game mechanics: player actions, operation results and session outcomes.

mod session;

pub use session::*;

use serde::{Deserialize, Serialize};

use crate::entities::{Direction, ItemId, RoomId};

/// What an action does, with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Move(Direction),
    PickUp(ItemId),
    Exit,
}

/// A legal action offered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Menu text, e.g. `Go East → Hallway`.
    pub label: String,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(label: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }
}

/// Result of the final encounter. There is no third outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    /// The player entered the terminal room.
    Encounter(Outcome),
    /// The player chose to leave.
    Quit,
}

/// A successful move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub direction: Direction,
    pub from: RoomId,
    pub to: RoomId,
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You head {} into the {}.",
            self.direction.as_str().to_lowercase(),
            self.to
        )
    }
}

/// Result of a pick-up that did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickUpResult {
    Collected {
        item: ItemId,
        /// Inventory size after collecting.
        held: usize,
        /// The inventory just reached the win threshold.
        complete: bool,
    },
    /// The item was already held; nothing changed.
    AlreadyCollected(ItemId),
}

impl PickUpResult {
    pub fn item(&self) -> &ItemId {
        match self {
            PickUpResult::Collected { item, .. } => item,
            PickUpResult::AlreadyCollected(item) => item,
        }
    }
}

impl std::fmt::Display for PickUpResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickUpResult::Collected { item, .. } => write!(f, "{} retrieved.", item),
            PickUpResult::AlreadyCollected(item) => {
                write!(f, "You already picked up the {}.", item)
            }
        }
    }
}

/// Everything that happened as a result of one applied action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// Moved to another room. `outcome` is set when the move entered the terminal room.
    Moved {
        result: MoveResult,
        outcome: Option<Outcome>,
    },
    PickedUp(PickUpResult),
    Exited,
}

impl Turn {
    /// How the session ended on this turn, if it did.
    pub fn ending(&self) -> Option<SessionEnd> {
        match self {
            Turn::Moved {
                outcome: Some(outcome),
                ..
            } => Some(SessionEnd::Encounter(*outcome)),
            Turn::Exited => Some(SessionEnd::Quit),
            _ => None,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Moved { result, .. } => write!(f, "{}", result),
            Turn::PickedUp(result) => write!(f, "{}", result),
            Turn::Exited => f.write_str("Thanks for playing! Goodbye."),
        }
    }
}
