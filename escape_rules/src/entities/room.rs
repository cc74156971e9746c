//! Room definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Direction, ItemId, RoomId};

/// A single location in the facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// At most one exit per direction.
    pub exits: BTreeMap<Direction, RoomId>,
    pub item: Option<ItemId>,
}

impl Room {
    /// Create a room with no exits and no item.
    pub fn new(id: impl Into<RoomId>) -> Self {
        Self {
            id: id.into(),
            exits: BTreeMap::new(),
            item: None,
        }
    }

    /// Add an exit, replacing any previous exit in that direction.
    pub fn with_exit(mut self, direction: Direction, destination: impl Into<RoomId>) -> Self {
        self.exits.insert(direction, destination.into());
        self
    }

    /// Place an item in the room.
    pub fn with_item(mut self, item: impl Into<ItemId>) -> Self {
        self.item = Some(item.into());
        self
    }

    /// Destination of the exit in the given direction, if any.
    pub fn exit(&self, direction: Direction) -> Option<&RoomId> {
        self.exits.get(&direction)
    }

    /// Exits in North, South, East, West order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, &RoomId)> {
        self.exits.iter().map(|(direction, room)| (*direction, room))
    }

    /// Whether this room offers exactly the given item.
    pub fn offers(&self, item: &ItemId) -> bool {
        self.item.as_ref() == Some(item)
    }
}
