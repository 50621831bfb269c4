//! The game-state aggregate.

use std::fmt;

use serde::{Deserialize, Serialize};

use delve_core::{
    Carried, CoreError, CoreResult, Enemy, Inventory, Room, RoomId, Scoreboard, World,
};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// The player entered a final room.
    FinalRoom,
    /// An enemy killed the player on an escape attempt.
    Slain,
    /// The player quit (or input ran out).
    Quit,
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FinalRoom => write!(f, "final room"),
            Self::Slain => write!(f, "slain"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

/// Everything that changes during play, in one owned aggregate.
///
/// A full snapshot of this struct is what the save slot stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Story title.
    pub title: String,
    /// Text printed once when the game starts.
    pub introduction: String,
    /// The room graph and the items lying in it.
    pub world: World,
    /// The room the player is in.
    pub current: RoomId,
    /// What the player carries.
    pub inventory: Inventory,
    /// Enemies still in play (recruited ones live in the inventory).
    pub enemies: Vec<Enemy>,
    /// The gold tally.
    pub scoreboard: Scoreboard,
    /// Completed moves.
    pub moves: u32,
    /// Announce enemy whereabouts before the next prompt.
    pub announce_enemies: bool,
    /// Set once the game is over.
    pub ending: Option<Ending>,
}

impl GameState {
    /// Create a fresh game with the player in `start`.
    pub fn new(
        title: impl Into<String>,
        introduction: impl Into<String>,
        world: World,
        start: RoomId,
        enemies: Vec<Enemy>,
    ) -> CoreResult<Self> {
        let state = Self {
            title: title.into(),
            introduction: introduction.into(),
            world,
            current: start,
            inventory: Inventory::new(),
            enemies,
            scoreboard: Scoreboard::new(),
            moves: 0,
            announce_enemies: true,
            ending: None,
        };
        state.validate()?;
        Ok(state)
    }

    /// Check every cross-reference: rooms, enemy positions, and name uniqueness.
    ///
    /// Enemy names must differ from each other and from recruited companions.
    /// A carried item may share a name with an enemy still in play.
    pub fn validate(&self) -> CoreResult<()> {
        self.world.validate()?;
        self.world.room(&self.current)?;

        for (i, enemy) in self.enemies.iter().enumerate() {
            self.world.room(&enemy.room)?;
            let recruited = self.inventory.entries().iter().any(
                |c| matches!(c, Carried::Companion(other) if other.is_named(&enemy.name)),
            );
            let clash = recruited || self.enemies[..i].iter().any(|e| e.is_named(&enemy.name));
            if clash {
                return Err(CoreError::DuplicateEnemy(enemy.name.clone()));
            }
        }

        let entries = self.inventory.entries();
        for (i, entry) in entries.iter().enumerate() {
            let name = entry.name();
            if entries[..i]
                .iter()
                .any(|e| delve_core::name::same_name(e.name(), name))
            {
                return Err(CoreError::DuplicateItem {
                    container: "inventory".to_string(),
                    item: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The room the player is in.
    pub fn current_room(&self) -> CoreResult<&Room> {
        self.world.room(&self.current)
    }

    /// The room the player is in, mutably.
    pub fn current_room_mut(&mut self) -> CoreResult<&mut Room> {
        self.world.room_mut(&self.current)
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.ending.is_some()
    }

    /// End the game. The first ending sticks.
    pub fn end(&mut self, ending: Ending) {
        if self.ending.is_none() {
            self.ending = Some(ending);
        }
    }

    /// Enemies in play, alive or not, in the player's room.
    pub fn enemies_here(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_in(&self.current))
    }

    /// Enemies that can still act.
    pub fn live_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{give, manor};
    use delve_core::Item;

    #[test]
    fn new_state_starts_clean() {
        let state = manor();
        assert_eq!(state.current.as_str(), "entrance hall");
        assert_eq!(state.score(), 0);
        assert_eq!(state.moves, 0);
        assert!(state.announce_enemies);
        assert!(!state.is_over());
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn unknown_start_room_rejected() {
        let state = manor();
        let result = GameState::new("t", "", state.world, RoomId::from("attic"), vec![]);
        assert!(matches!(result, Err(CoreError::UnknownRoom(_))));
    }

    #[test]
    fn enemy_in_unknown_room_rejected() {
        let state = manor();
        let result = GameState::new(
            "t",
            "",
            state.world,
            RoomId::from("entrance hall"),
            vec![Enemy::new("Troll", "", 0, "attic")],
        );
        assert!(matches!(result, Err(CoreError::UnknownRoom(_))));
    }

    #[test]
    fn duplicate_enemy_names_rejected() {
        let state = manor();
        let result = GameState::new(
            "t",
            "",
            state.world,
            RoomId::from("entrance hall"),
            vec![
                Enemy::new("Troll", "", 0, "library"),
                Enemy::new("troll", "", 0, "cellar"),
            ],
        );
        assert!(matches!(result, Err(CoreError::DuplicateEnemy(_))));
    }

    #[test]
    fn first_ending_sticks() {
        let mut state = manor();
        state.end(Ending::Slain);
        state.end(Ending::Quit);
        assert_eq!(state.ending, Some(Ending::Slain));
    }

    #[test]
    fn enemies_here_follows_current_room() {
        let mut state = manor();
        assert_eq!(state.enemies_here().count(), 0);
        state.current = RoomId::from("laboratory");
        let names: Vec<_> = state.enemies_here().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Troll"]);
    }

    #[test]
    fn carried_item_may_share_an_enemy_name() {
        let mut state = manor();
        give(&mut state, Item::new("troll", "A troll doll.", 1));
        state.validate().unwrap();
    }

    #[test]
    fn companion_sharing_an_enemy_name_rejected() {
        let mut state = manor();
        let twin = Enemy::new("TROLL", "", 0, "laboratory");
        state.inventory.add(Carried::Companion(twin)).unwrap();
        assert!(matches!(state.validate(), Err(CoreError::DuplicateEnemy(_))));
    }
}
