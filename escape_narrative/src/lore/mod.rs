//! Lore - the flavor text that surrounds the rules.
//!
//! Lore never affects game state. Missing entries fall back to empty text so a
//! custom world can run with partial lore.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use escape_rules::{ItemId, Outcome, RoomId};

const STANDARD_LORE: &str = include_str!("../../data/lore.toml");

/// Errors raised while loading lore.
#[derive(Debug, Error)]
pub enum LoreError {
    #[error("failed to read lore file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lore data: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Narration for one world.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Lore {
    /// Lines printed before the first turn.
    pub intro: Vec<String>,

    /// Appended to the pick-up message that completes the set.
    pub ready_hint: String,

    /// Shown in place of the gear list while the inventory is empty.
    pub empty_inventory: String,

    pub farewell: String,
    pub closing: String,

    /// Final-encounter narration with a full kit.
    pub victory: Vec<String>,

    /// Final-encounter narration with missing items.
    pub defeat: Vec<String>,

    /// Room name -> story line.
    rooms: HashMap<String, String>,

    /// Item name -> note shown when collected.
    items: HashMap<String, String>,
}

impl Lore {
    /// The built-in Rogue AI narration.
    pub fn standard() -> Result<Self, LoreError> {
        Self::from_toml_str(STANDARD_LORE)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, LoreError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoreError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn story(&self, room: &RoomId) -> Option<&str> {
        self.rooms.get(room.as_str()).map(String::as_str)
    }

    pub fn note(&self, item: &ItemId) -> Option<&str> {
        self.items.get(item.as_str()).map(String::as_str)
    }

    /// Narration for the final encounter.
    pub fn encounter(&self, outcome: Outcome) -> &[String] {
        match outcome {
            Outcome::Win => &self.victory,
            Outcome::Lose => &self.defeat,
        }
    }
}
