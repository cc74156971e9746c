//! Error types for world loading and session operations.

use thiserror::Error;

use crate::entities::{Direction, ItemId, RoomId};

/// Errors raised while building or querying the world graph.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read world file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed world data: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),

    #[error("room {room} declares unknown direction {direction:?}")]
    UnknownDirection { room: RoomId, direction: String },

    #[error("room {room} is declared more than once")]
    DuplicateRoom { room: RoomId },

    #[error("exit {direction} from {room} leads to missing room {destination}")]
    DanglingExit {
        room: RoomId,
        direction: Direction,
        destination: RoomId,
    },

    #[error("item {item} is placed in more than one room")]
    DuplicateItem { item: ItemId },

    #[error("terminal room {room} must not hold an item")]
    TerminalHoldsItem { room: RoomId },

    #[error("start room and terminal room are both {room}")]
    StartIsTerminal { room: RoomId },

    #[error("room {room} cannot be reached from the start room")]
    Unreachable { room: RoomId },

    #[error("world holds {found} items but {expected} are required to win")]
    ItemCountMismatch { expected: usize, found: usize },
}

/// Errors returned by session operations. None of them are fatal: the session
/// state is left untouched and the player gets another turn.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("You can't go {direction} from the {room}!")]
    InvalidDirection { room: RoomId, direction: Direction },

    #[error("There is no {item} to collect in the {room}.")]
    NothingToCollect { room: RoomId, item: ItemId },

    #[error("The session is over; no further actions are accepted.")]
    SessionOver,

    #[error(transparent)]
    World(#[from] WorldError),
}
