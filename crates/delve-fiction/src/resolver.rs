//! Action resolution: applies parsed commands to the game state.
//!
//! Every function takes the whole [`GameState`] by exclusive borrow for the
//! duration of one command and returns a [`Report`]. Lookup misses are
//! handled reports, not errors.

use rand::rngs::StdRng;
use tracing::{debug, info};

use delve_core::Carried;

use crate::combat;
use crate::error::FictionResult;
use crate::parser::Direction;
use crate::state::{Ending, GameState};

/// The text and bookkeeping produced by one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Lines to show the player, in order.
    pub lines: Vec<String>,
    /// Whether some handler claimed the input. Unclaimed input ends up as
    /// "Invalid action."
    pub handled: bool,
}

impl Report {
    /// An empty report that claims the input.
    pub fn handled() -> Self {
        Self {
            lines: Vec::new(),
            handled: true,
        }
    }

    /// A claimed report with a single line.
    pub fn line(text: impl Into<String>) -> Self {
        let mut report = Self::handled();
        report.say(text);
        report
    }

    /// Append a line.
    pub fn say(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: Report) {
        self.lines.extend(other.lines);
        self.handled |= other.handled;
    }
}

/// Move the first room item mentioned by `phrase` into the inventory.
pub fn pick_up(state: &mut GameState, phrase: &str) -> FictionResult<Report> {
    let room = state.world.room_mut(&state.current)?;
    let Some(index) = room.find_mentioned(phrase) else {
        return Ok(Report::line("You don't find that item in this room."));
    };
    if let Some(item) = room.item(index)
        && state.inventory.contains(&item.name)
    {
        return Ok(Report::line(format!("You already carry a {}.", item.name)));
    }
    let Some(item) = room.take_item(index) else {
        return Ok(Report::line("You don't find that item in this room."));
    };

    let name = item.name.clone();
    let worth = item.points;
    state.inventory.add(Carried::Item(item))?;
    state.scoreboard.award(worth);
    debug!(item = %name, worth, score = state.score(), "item_picked_up");

    Ok(Report::line(format!("You pick up the {name}.")))
}

/// Move the first carried item mentioned by `phrase` into the current room.
pub fn drop_item(state: &mut GameState, phrase: &str) -> FictionResult<Report> {
    let Some(index) = state.inventory.find_droppable(phrase) else {
        return Ok(Report::line("You don't have that item."));
    };
    let room = state.world.room_mut(&state.current)?;
    let Some(Carried::Item(item)) = state.inventory.get(index) else {
        return Ok(Report::line("You don't have that item."));
    };
    if room.find_named(&item.name).is_some() {
        return Ok(Report::line(format!("There is already a {} here.", item.name)));
    }
    let Some(Carried::Item(item)) = state.inventory.take(index) else {
        return Ok(Report::line("You don't have that item."));
    };

    let name = item.name.clone();
    let worth = item.points;
    room.add_item(item)?;
    state.scoreboard.deduct(worth);
    debug!(item = %name, worth, score = state.score(), "item_dropped");

    Ok(Report::line(format!("You drop the {name}.")))
}

/// Print the description of a carried item, or failing that one in the room.
pub fn describe(state: &GameState, phrase: &str) -> FictionResult<Report> {
    if let Some(entry) = state
        .inventory
        .find_mentioned(phrase)
        .and_then(|i| state.inventory.get(i))
    {
        let mut report = Report::line("The item is in your inventory.");
        report.say(entry.description());
        return Ok(report);
    }

    let room = state.current_room()?;
    if let Some(item) = room.find_mentioned(phrase).and_then(|i| room.item(i)) {
        let mut report = Report::line("The item is in the current room.");
        report.say(&item.description);
        return Ok(report);
    }

    Ok(Report::line("you don't have that item"))
}

/// Follow `token` out of the current room.
///
/// Any exact transition token counts as a move, and so does a bare direction
/// even when the room has no exit that way. A live enemy in the room kills
/// the player on any move attempt. Every second completed move lets the
/// enemies roam.
pub fn travel(state: &mut GameState, token: &str, rng: &mut StdRng) -> FictionResult<Report> {
    let destination = state.world.destination(&state.current, token)?.cloned();
    if destination.is_none() && Direction::parse(token).is_none() {
        return Ok(Report::default());
    }

    if let Some(enemy) = combat::ambusher(state) {
        let name = enemy.name.clone();
        state.scoreboard.reset();
        state.end(Ending::Slain);
        info!(enemy = %name, room = %state.current, "player_slain");
        return Ok(Report::line(format!("The {name} attacks and slays you.")));
    }

    let Some(destination) = destination else {
        return Ok(Report::default());
    };

    let from = std::mem::replace(&mut state.current, destination);
    if state.moves > 0 && state.moves.is_multiple_of(2) {
        combat::roam(state, rng)?;
        state.announce_enemies = true;
    }
    state.moves += 1;
    info!(from = %from, to = %state.current, moves = state.moves, "player_moved");

    Ok(Report::handled())
}
