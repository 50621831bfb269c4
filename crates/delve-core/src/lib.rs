//! Core types for Delve: items, enemies, rooms, and the room graph.
//!
//! This crate is pure data plus invariants. It knows nothing about commands,
//! turns, or rendering; the engine in `delve-fiction` drives it. Rooms live in
//! an arena ([`World`]) and everything that points at a room (transitions,
//! enemy positions, the player's location) does so by [`RoomId`].

/// Enemies and their positions in the room graph.
pub mod enemy;
/// Error types used throughout the crate.
pub mod error;
/// The player's inventory.
pub mod inventory;
/// Items, weapons, and destructible items.
pub mod item;
/// Case-insensitive name matching.
pub mod name;
/// Rooms, room identifiers, and transitions.
pub mod room;
/// The score counter.
pub mod score;
/// The room arena.
pub mod world;

/// Re-export enemy types.
pub use enemy::Enemy;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export inventory types.
pub use inventory::{Carried, Inventory};
/// Re-export item types.
pub use item::{Item, ItemKind};
/// Re-export room types.
pub use room::{Room, RoomId, Transition};
/// Re-export the scoreboard.
pub use score::Scoreboard;
/// Re-export the room arena.
pub use world::World;
