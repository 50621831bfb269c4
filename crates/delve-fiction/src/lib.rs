//! Command interpreter and game-state machine for Delve adventures.
//!
//! A game is a [`GameState`] built by a [`Story`]. A [`GameSession`] owns the
//! state together with its RNG and save slot, and turns each line of player
//! input into text. [`controller::run`] drives a session from any reader to
//! any writer.

/// Attacks, recruitment, and enemy roaming.
pub mod combat;
/// Session configuration.
pub mod config;
/// The input loop.
pub mod controller;
/// Error types for the fiction engine.
pub mod error;
/// Text rendering.
pub mod narrator;
/// Command parsing.
pub mod parser;
/// Save slots.
pub mod persistence;
/// Action resolution.
pub mod resolver;
/// Play sessions.
pub mod session;
/// The game-state aggregate.
pub mod state;
/// Story definitions.
pub mod story;

#[cfg(test)]
mod testing;

pub use config::GameConfig;
pub use controller::{Summary, run};
pub use error::{FictionError, FictionResult};
pub use parser::{Command, Direction, parse_command};
pub use persistence::{JsonFileSlot, MemorySlot, PersistenceError, SaveSlot};
pub use session::{GameSession, Outcome};
pub use state::{Ending, GameState};
pub use story::{Story, StoryDef};
