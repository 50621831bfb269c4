use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::room::RoomId;

/// A hostile creature that roams the room graph.
///
/// The enemy does not own its room; `room` is an identifier resolved through
/// the [`World`](crate::World) on each access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Unique (case-insensitive) name.
    pub name: String,
    /// Description printed by `describe` once the enemy is carried.
    pub description: String,
    /// Gold value of the enemy.
    #[serde(default)]
    pub points: u32,
    /// Whether the enemy has been struck down.
    #[serde(default)]
    pub destroyed: bool,
    /// The room the enemy currently occupies.
    pub room: RoomId,
    /// Item dropped into the room when the enemy is destroyed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<Item>,
}

impl Enemy {
    /// Create a live enemy in `room`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        points: u32,
        room: impl Into<RoomId>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            points,
            destroyed: false,
            room: room.into(),
            replacement: None,
        }
    }

    /// Set the item revealed on destruction.
    pub fn with_replacement(mut self, item: Item) -> Self {
        self.replacement = Some(item);
        self
    }

    /// Whether the enemy can still act.
    pub fn is_alive(&self) -> bool {
        !self.destroyed
    }

    /// Whether the enemy is in `room`, dead or alive.
    pub fn is_in(&self, room: &RoomId) -> bool {
        &self.room == room
    }

    /// Case-insensitive name equality.
    pub fn is_named(&self, name: &str) -> bool {
        crate::name::same_name(&self.name, name)
    }

    /// Destroy the enemy and hand back its replacement item.
    ///
    /// A no-op returning `None` when already destroyed.
    pub fn destroy(&mut self) -> Option<Item> {
        if self.destroyed {
            return None;
        }
        self.destroyed = true;
        self.replacement.take()
    }
}
