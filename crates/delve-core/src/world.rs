use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::room::{Room, RoomId, Transition};

/// The room arena. Owns every room; rooms refer to each other by [`RoomId`].
///
/// Cycles in the transition graph are expected. Deserialization goes through
/// [`World::validate`], so a world read from disk never has dangling edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WorldRepr", into = "WorldRepr")]
pub struct World {
    rooms: Vec<Room>,
    by_name: HashMap<RoomId, usize>,
}

#[derive(Serialize, Deserialize)]
struct WorldRepr {
    rooms: Vec<Room>,
}

impl TryFrom<WorldRepr> for World {
    type Error = CoreError;

    fn try_from(repr: WorldRepr) -> CoreResult<Self> {
        let mut world = World::new();
        for room in repr.rooms {
            world.add_room(room)?;
        }
        world.validate()?;
        Ok(world)
    }
}

impl From<World> for WorldRepr {
    fn from(world: World) -> Self {
        Self { rooms: world.rooms }
    }
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Add a room. Transitions may point at rooms added later; call
    /// [`World::validate`] once the graph is complete.
    pub fn add_room(&mut self, room: Room) -> CoreResult<()> {
        if self.by_name.contains_key(&room.name) {
            return Err(CoreError::DuplicateRoom(room.name.to_string()));
        }
        for (i, item) in room.items().iter().enumerate() {
            if room.items()[..i].iter().any(|other| other.is_named(&item.name)) {
                return Err(CoreError::DuplicateItem {
                    container: room.name.to_string(),
                    item: item.name.clone(),
                });
            }
        }
        self.by_name.insert(room.name.clone(), self.rooms.len());
        self.rooms.push(room);
        Ok(())
    }

    /// Add a transition between two existing rooms.
    pub fn connect(
        &mut self,
        from: &RoomId,
        token: impl Into<String>,
        to: impl Into<RoomId>,
    ) -> CoreResult<()> {
        let to = to.into();
        let token = token.into();
        if !self.contains(&to) {
            return Err(CoreError::DanglingTransition {
                from: from.to_string(),
                token,
                to: to.to_string(),
            });
        }
        self.room_mut(from)?.set_transition(token, to);
        Ok(())
    }

    /// Check that every transition leads to a room in this world.
    pub fn validate(&self) -> CoreResult<()> {
        for room in &self.rooms {
            for Transition { token, target } in room.transitions() {
                if !self.contains(target) {
                    return Err(CoreError::DanglingTransition {
                        from: room.name.to_string(),
                        token: token.clone(),
                        to: target.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Resolve a room by name.
    pub fn resolve(&self, name: &str) -> CoreResult<&Room> {
        self.room(&RoomId::from(name))
    }

    /// Whether a room with this identifier exists.
    pub fn contains(&self, id: &RoomId) -> bool {
        self.by_name.contains_key(id)
    }

    /// Get a room by identifier.
    pub fn room(&self, id: &RoomId) -> CoreResult<&Room> {
        self.by_name
            .get(id)
            .and_then(|&idx| self.rooms.get(idx))
            .ok_or_else(|| CoreError::UnknownRoom(id.to_string()))
    }

    /// Get a mutable room by identifier.
    pub fn room_mut(&mut self, id: &RoomId) -> CoreResult<&mut Room> {
        self.by_name
            .get(id)
            .and_then(|&idx| self.rooms.get_mut(idx))
            .ok_or_else(|| CoreError::UnknownRoom(id.to_string()))
    }

    /// Outgoing transitions of a room.
    pub fn transitions_of(&self, id: &RoomId) -> CoreResult<&[Transition]> {
        Ok(self.room(id)?.transitions())
    }

    /// Where `token` leads from `from`, if anywhere.
    pub fn destination(&self, from: &RoomId, token: &str) -> CoreResult<Option<&RoomId>> {
        Ok(self.room(from)?.destination(token))
    }

    /// All rooms in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
