//! Text rendering for rooms, enemies, and the final score.

use delve_core::Room;

use crate::error::FictionResult;
use crate::state::GameState;

/// A room's description followed by one line per item.
pub fn room_lines(room: &Room) -> Vec<String> {
    let mut lines = vec![room.description.clone()];
    lines.extend(room.items().iter().map(ToString::to_string));
    lines
}

/// The current room with the enemies present in it.
pub fn describe_current(state: &GameState) -> FictionResult<Vec<String>> {
    let mut lines = room_lines(state.current_room()?);
    for enemy in state.enemies_here() {
        if enemy.is_alive() {
            lines.push(format!("{} is in the room.", enemy.name));
        } else {
            lines.push(format!("{} lies destroyed here.", enemy.name));
        }
    }
    Ok(lines)
}

/// Where every live enemy is.
pub fn enemy_whereabouts(state: &GameState) -> Vec<String> {
    state
        .live_enemies()
        .map(|e| format!("{} is now in {}.", e.name, e.room))
        .collect()
}

/// The closing line of every game.
pub fn final_score(score: u32) -> String {
    format!("Your score was: {score}")
}
