//! Stories: the content that seeds a new game.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use delve_core::{Enemy, Room, RoomId, World};

use crate::error::{FictionError, FictionResult};
use crate::state::GameState;

/// Something that can set up a fresh game.
pub trait Story {
    /// Build the initial state: rooms, items, enemies, and the start room.
    fn build(&self) -> FictionResult<GameState>;
}

/// A story in data form, as stored in a JSON story file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDef {
    /// Story title.
    pub title: String,
    /// Printed once before the first prompt.
    #[serde(default)]
    pub introduction: String,
    /// Where the player begins.
    pub start: RoomId,
    /// Every room, with its items and transitions.
    pub rooms: Vec<Room>,
    /// Enemies and their starting rooms.
    #[serde(default)]
    pub enemies: Vec<Enemy>,
}

impl StoryDef {
    /// Parse a story from JSON text.
    pub fn from_json(text: &str) -> FictionResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a story file.
    pub fn from_path(path: impl AsRef<Path>) -> FictionResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FictionError::StoryFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> FictionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Story for StoryDef {
    fn build(&self) -> FictionResult<GameState> {
        if self.rooms.is_empty() {
            return Err(FictionError::EmptyStory(self.title.clone()));
        }
        let mut world = World::new();
        for room in &self.rooms {
            world.add_room(room.clone())?;
        }
        let state = GameState::new(
            self.title.clone(),
            self.introduction.clone(),
            world,
            self.start.clone(),
            self.enemies.clone(),
        )?;
        debug!(title = %self.title, rooms = state.world.room_count(), "story_built");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::{CoreError, Item};
    use tempfile::TempDir;

    fn cottage() -> StoryDef {
        StoryDef {
            title: "Cottage".to_string(),
            introduction: "A small cottage.".to_string(),
            start: RoomId::from("kitchen"),
            rooms: vec![
                Room::new("kitchen", "A warm kitchen.")
                    .with_item(Item::new("knife", "A kitchen knife.", 5).into_weapon())
                    .unwrap()
                    .with_transition("out", "garden"),
                Room::new("garden", "Fresh air.").with_final(true),
            ],
            enemies: vec![Enemy::new("Rat", "A fat rat.", 1, "kitchen")],
        }
    }

    #[test]
    fn build_places_player_at_start() {
        let state = cottage().build().unwrap();
        assert_eq!(state.title, "Cottage");
        assert_eq!(state.current, RoomId::from("kitchen"));
        assert_eq!(state.world.room_count(), 2);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn empty_story_rejected() {
        let mut def = cottage();
        def.rooms.clear();
        assert!(matches!(def.build(), Err(FictionError::EmptyStory(_))));
    }

    #[test]
    fn dangling_transition_rejected() {
        let mut def = cottage();
        def.rooms[1] = Room::new("garden", "").with_transition("in", "attic");
        assert!(matches!(
            def.build(),
            Err(FictionError::World(CoreError::DanglingTransition { .. }))
        ));
    }

    #[test]
    fn duplicate_room_rejected() {
        let mut def = cottage();
        def.rooms.push(Room::new("kitchen", "Again."));
        assert!(matches!(
            def.build(),
            Err(FictionError::World(CoreError::DuplicateRoom(_)))
        ));
    }

    #[test]
    fn file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cottage.json");
        let def = cottage();
        fs::write(&path, def.to_json().unwrap()).unwrap();
        assert_eq!(StoryDef::from_path(&path).unwrap(), def);
    }

    #[test]
    fn minimal_json() {
        let def = StoryDef::from_json(
            r#"{
                "title": "Closet",
                "start": "closet",
                "rooms": [{ "name": "closet", "description": "Dark." }]
            }"#,
        )
        .unwrap();
        let state = def.build().unwrap();
        assert!(state.enemies.is_empty());
        assert!(state.current_room().unwrap().items().is_empty());
    }

    #[test]
    fn missing_file() {
        let result = StoryDef::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(FictionError::StoryFile { .. })));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            StoryDef::from_json("{"),
            Err(FictionError::StoryFormat(_))
        ));
    }
}
