//! # Escape Rules
//!
//! The rules crate for Escape the Rogue AI - the room graph, the items it holds,
//! and the session state machine that gates the final encounter on a full
//! inventory. This crate is the single source of truth for game state and does
//! not render anything.

pub mod entities;
pub mod error;
pub mod mechanics;
pub mod world_state;

pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use world_state::*;
