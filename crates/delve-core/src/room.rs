use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item::Item;

/// Stable identifier of a room: its unique name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Create an identifier from a room name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The room name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for RoomId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An outgoing edge of a room.
///
/// The token is matched verbatim against player input. It is usually a
/// direction, but any phrase works ("pick up elven book").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The trigger token.
    pub token: String,
    /// Where the transition leads.
    pub target: RoomId,
}

/// A room in the world graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room name.
    pub name: RoomId,
    /// Text printed when the player is in the room.
    pub description: String,
    /// Entering this room ends the game.
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    transitions: Vec<Transition>,
}

impl Room {
    /// Create an empty, non-final room.
    pub fn new(name: impl Into<RoomId>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_final: false,
            items: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Mark whether entering this room ends the game.
    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    /// Add an item while building the room.
    pub fn with_item(mut self, item: Item) -> CoreResult<Self> {
        self.add_item(item)?;
        Ok(self)
    }

    /// Add a transition while building the room.
    pub fn with_transition(mut self, token: impl Into<String>, target: impl Into<RoomId>) -> Self {
        self.set_transition(token, target);
        self
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get an item by position.
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Get a mutable item by position.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    /// Append an item. Fails if an item with the same name is already here.
    pub fn add_item(&mut self, item: Item) -> CoreResult<()> {
        if self.items.iter().any(|i| i.is_named(&item.name)) {
            return Err(CoreError::DuplicateItem {
                container: self.name.to_string(),
                item: item.name,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove the item at `index`, keeping the order of the rest.
    pub fn take_item(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Position of the first item, in stored order, whose name `phrase` mentions.
    pub fn find_mentioned(&self, phrase: &str) -> Option<usize> {
        self.items.iter().position(|i| i.is_mentioned_in(phrase))
    }

    /// Position of the item with exactly this name (case-insensitive).
    pub fn find_named(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.is_named(name))
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Outgoing transitions in definition order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Destination for an exact token match.
    pub fn destination(&self, token: &str) -> Option<&RoomId> {
        self.transitions
            .iter()
            .find(|t| t.token == token)
            .map(|t| &t.target)
    }

    /// Add a transition, replacing any existing one with the same token.
    pub fn set_transition(&mut self, token: impl Into<String>, target: impl Into<RoomId>) {
        let token = token.into();
        let target = target.into();
        match self.transitions.iter_mut().find(|t| t.token == token) {
            Some(existing) => existing.target = target,
            None => self.transitions.push(Transition { token, target }),
        }
    }
}
