use serde::{Deserialize, Serialize};

use crate::enemy::Enemy;
use crate::error::{CoreError, CoreResult};
use crate::item::Item;

/// Something the player carries: an item, or an enemy recruited after combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "carried", rename_all = "snake_case")]
pub enum Carried {
    /// A picked-up item.
    Item(Item),
    /// A recruited enemy.
    Companion(Enemy),
}

impl Carried {
    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Item(item) => &item.name,
            Self::Companion(enemy) => &enemy.name,
        }
    }

    /// Long description.
    pub fn description(&self) -> &str {
        match self {
            Self::Item(item) => &item.description,
            Self::Companion(enemy) => &enemy.description,
        }
    }

    /// Whether `phrase` mentions this entry's name (case-insensitive substring).
    pub fn is_mentioned_in(&self, phrase: &str) -> bool {
        crate::name::mentions(phrase, self.name())
    }

    fn is_named(&self, name: &str) -> bool {
        crate::name::same_name(self.name(), name)
    }
}

/// The ordered collection of things the player carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    entries: Vec<Carried>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in the order they were added.
    pub fn entries(&self) -> &[Carried] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry with this name is carried.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.is_named(name))
    }

    /// Append an entry. Fails if something with the same name is carried.
    pub fn add(&mut self, entry: Carried) -> CoreResult<()> {
        if self.contains(entry.name()) {
            return Err(CoreError::DuplicateItem {
                container: "inventory".to_string(),
                item: entry.name().to_string(),
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Position of the first entry of any kind whose name `phrase` mentions.
    pub fn find_mentioned(&self, phrase: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.is_mentioned_in(phrase))
    }

    /// Position of the first droppable item whose name `phrase` mentions.
    ///
    /// Companions are never droppable.
    pub fn find_droppable(&self, phrase: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| matches!(e, Carried::Item(_)) && e.is_mentioned_in(phrase))
    }

    /// The carried weapon with exactly this name (case-insensitive).
    pub fn weapon(&self, name: &str) -> Option<&Item> {
        self.entries.iter().find_map(|e| match e {
            Carried::Item(item) if item.is_weapon() && item.is_named(name) => Some(item),
            _ => None,
        })
    }

    /// Get an entry by position.
    pub fn get(&self, index: usize) -> Option<&Carried> {
        self.entries.get(index)
    }

    /// Remove the entry at `index`, keeping the order of the rest.
    pub fn take(&mut self, index: usize) -> Option<Carried> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }
}
