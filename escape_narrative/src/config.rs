//! Runtime configuration, read from the environment once at startup.

use std::path::PathBuf;

use escape_rules::{WorldError, WorldGraph};

use crate::lore::{Lore, LoreError};

/// Optional path to a world TOML file replacing the built-in facility.
pub const WORLD_FILE_VAR: &str = "ESCAPE_WORLD_FILE";

/// Optional path to a lore TOML file replacing the built-in narration.
pub const LORE_FILE_VAR: &str = "ESCAPE_LORE_FILE";

/// Default log filter when `RUST_LOG` is unset. Logs go to stderr.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub world_file: Option<PathBuf>,
    pub lore_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };
        Self {
            world_file: path(WORLD_FILE_VAR),
            lore_file: path(LORE_FILE_VAR),
        }
    }

    pub fn load_world(&self) -> Result<WorldGraph, WorldError> {
        match &self.world_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading world file");
                WorldGraph::load(path)
            }
            None => WorldGraph::standard(),
        }
    }

    pub fn load_lore(&self) -> Result<Lore, LoreError> {
        match &self.lore_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading lore file");
                Lore::load(path)
            }
            None => Lore::standard(),
        }
    }
}
