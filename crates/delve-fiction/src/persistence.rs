//! Save slots: whole-game snapshots as versioned JSON.
//!
//! A save file is an envelope around the full [`GameState`], including the
//! room graph, so a saved game can be resumed without the story that
//! created it:
//!
//! ```json
//! { "version": 1, "saved_at": "2024-05-01T12:00:00Z", "state": { ... } }
//! ```
//!
//! Decoding checks the version before touching the state and re-validates
//! every cross-reference afterwards.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::state::GameState;

/// Format version written into every save file.
pub const SAVE_VERSION: u32 = 1;

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors from reading or writing a save slot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Nothing has been saved yet.
    #[error("no saved game at {}", path.display())]
    Missing {
        /// The slot's file.
        path: PathBuf,
    },

    /// The file could not be read or written.
    #[error("cannot access save file {}: {source}", path.display())]
    Io {
        /// The slot's file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The contents are not a save file.
    #[error("malformed save file: {0}")]
    Format(#[from] serde_json::Error),

    /// The file was written by an incompatible version.
    #[error("unsupported save version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version in the file.
        found: u32,
        /// Version this build reads.
        expected: u32,
    },

    /// The slot exists but holds no data.
    #[error("save file is empty")]
    Empty,

    /// The snapshot parsed but refers to things that do not exist.
    #[error("inconsistent saved game: {0}")]
    Inconsistent(#[from] delve_core::CoreError),
}

#[derive(Serialize)]
struct Envelope<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    state: &'a GameState,
}

#[derive(Deserialize)]
struct Header {
    version: u32,
}

#[derive(Deserialize)]
struct SaveFile {
    saved_at: DateTime<Utc>,
    state: GameState,
}

/// Serialize a snapshot with the current timestamp.
pub fn encode(state: &GameState) -> PersistenceResult<String> {
    let envelope = Envelope {
        version: SAVE_VERSION,
        saved_at: Utc::now(),
        state,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Parse and validate a snapshot.
pub fn decode(text: &str) -> PersistenceResult<GameState> {
    if text.trim().is_empty() {
        return Err(PersistenceError::Empty);
    }
    let header: Header = serde_json::from_str(text)?;
    if header.version != SAVE_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: header.version,
            expected: SAVE_VERSION,
        });
    }
    let file: SaveFile = serde_json::from_str(text)?;
    file.state.validate()?;
    debug!(saved_at = %file.saved_at, "save_decoded");
    Ok(file.state)
}

/// A single named place to keep one saved game.
pub trait SaveSlot {
    /// Overwrite the slot with `state`.
    fn save(&mut self, state: &GameState) -> PersistenceResult<()>;

    /// Read the slot back.
    fn load(&self) -> PersistenceResult<GameState>;

    /// Where the slot lives, for logs.
    fn location(&self) -> String;
}

/// A save slot backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    /// Use the file at `path`. Nothing is touched until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this slot writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SaveSlot for JsonFileSlot {
    fn save(&mut self, state: &GameState) -> PersistenceResult<()> {
        let text = encode(state)?;
        write_atomic(&self.path, &text).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), "save_written");
        Ok(())
    }

    fn load(&self) -> PersistenceResult<GameState> {
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PersistenceError::Missing {
                path: self.path.clone(),
            },
            _ => self.io_error(e),
        })?;
        decode(&text)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Write `text` next to `path` and rename it into place, so a failed write
/// leaves any previous save intact.
fn write_atomic(path: &Path, text: &str) -> io::Result<()> {
    let tmp = temp_path_for(path);
    if let Err(error) = fs::write(&tmp, text).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(error);
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("save");
    path.with_file_name(format!("{file_name}.tmp"))
}

/// An in-memory slot using the same encoding as the file slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    data: Option<String>,
}

impl MemorySlot {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw encoded snapshot, if any.
    pub fn contents(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl SaveSlot for MemorySlot {
    fn save(&mut self, state: &GameState) -> PersistenceResult<()> {
        self.data = Some(encode(state)?);
        Ok(())
    }

    fn load(&self) -> PersistenceResult<GameState> {
        match &self.data {
            Some(text) => decode(text),
            None => Err(PersistenceError::Missing {
                path: PathBuf::from("<memory>"),
            }),
        }
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
