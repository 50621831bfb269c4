use std::fmt;

use serde::{Deserialize, Serialize};

/// What an item can do beyond being carried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// An ordinary item.
    #[default]
    Plain,
    /// An item that can be used to attack.
    Weapon,
    /// An item that can be attacked and destroyed.
    Attackable {
        /// Whether the item has been destroyed.
        #[serde(default)]
        destroyed: bool,
        /// Item revealed in the room when this one is destroyed.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        replacement: Option<Box<Item>>,
    },
}

/// An item that can sit in a room or be carried.
///
/// Identity is the case-insensitive name: a container never holds two items
/// whose names compare equal ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Short name used in listings and commands.
    pub name: String,
    /// Long description printed by `describe`.
    pub description: String,
    /// Gold value added to the score on pickup.
    #[serde(default)]
    pub points: u32,
    /// Weapon and destructible variants.
    #[serde(default)]
    pub kind: ItemKind,
}

impl Item {
    /// Create a plain item.
    pub fn new(name: impl Into<String>, description: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            points,
            kind: ItemKind::Plain,
        }
    }

    /// Turn this item into a weapon.
    pub fn into_weapon(mut self) -> Self {
        self.kind = ItemKind::Weapon;
        self
    }

    /// Turn this item into a destructible one that reveals `replacement`.
    pub fn into_attackable(mut self, replacement: Option<Item>) -> Self {
        self.kind = ItemKind::Attackable {
            destroyed: false,
            replacement: replacement.map(Box::new),
        };
        self
    }

    /// Whether the item can be used to attack.
    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon)
    }

    /// Whether the item can be attacked.
    pub fn is_attackable(&self) -> bool {
        matches!(self.kind, ItemKind::Attackable { .. })
    }

    /// Whether the item has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        matches!(self.kind, ItemKind::Attackable { destroyed: true, .. })
    }

    /// Case-insensitive name equality.
    pub fn is_named(&self, name: &str) -> bool {
        crate::name::same_name(&self.name, name)
    }

    /// Whether `phrase` mentions this item's name (case-insensitive substring).
    pub fn is_mentioned_in(&self, phrase: &str) -> bool {
        crate::name::mentions(phrase, &self.name)
    }

    /// Destroy the item and hand back its replacement.
    ///
    /// Returns `None` without touching anything when the item is not
    /// attackable or is already destroyed.
    pub fn destroy(&mut self) -> Option<Item> {
        if let ItemKind::Attackable {
            destroyed,
            replacement,
        } = &mut self.kind
            && !*destroyed
        {
            *destroyed = true;
            return replacement.take().map(|item| *item);
        }
        None
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_destroyed() {
            write!(f, "A destroyed {}, worth 0.", self.name)
        } else {
            write!(f, "{}: ({} gold) {}", self.name, self.points, self.description)
        }
    }
}
