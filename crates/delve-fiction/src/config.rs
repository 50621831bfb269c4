//! Configuration for a play session.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default save file, relative to the working directory.
pub const DEFAULT_SAVE_FILE: &str = "SavedGame.json";

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed for enemy roaming. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// The save slot's file.
    pub save_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the save file.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// A fresh generator for this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
