//! Error types for the fiction engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::persistence::PersistenceError;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while building or running a game.
///
/// Lookup misses during play ("you don't have that item") are not errors;
/// they are handled outcomes reported as text.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The world model rejected an operation.
    #[error(transparent)]
    World(#[from] delve_core::CoreError),

    /// The save slot could not be read or written.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// A story has no rooms.
    #[error("story \"{0}\" has no rooms")]
    EmptyStory(String),

    /// A story file could not be read.
    #[error("cannot read story file {}: {source}", path.display())]
    StoryFile {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A story file is not valid JSON for a story.
    #[error("invalid story definition: {0}")]
    StoryFormat(#[from] serde_json::Error),

    /// Console I/O failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
