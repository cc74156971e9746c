//! # Escape Narrative
//!
//! The presentation side of Escape the Rogue AI. This crate renders the state
//! held by `escape_rules`, forwards the player's menu choices into it, and
//! narrates the ending.
//!
//! ## Core Components
//!
//! - **lore**: Intro text, room stories, item notes and encounter narration
//! - **console**: Status rendering, selection parsing and the turn loop
//! - **config**: Environment-driven configuration for the binary

pub mod config;
pub mod console;
pub mod lore;

pub use config::*;
pub use console::*;
pub use lore::*;
