//! Attacks, recruitment, and enemy movement.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use delve_core::{Carried, Item, RoomId};

use crate::error::FictionResult;
use crate::resolver::Report;
use crate::state::GameState;

/// What an attack name resolved to in the current room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackTarget {
    /// Index into [`GameState::enemies`].
    Enemy(usize),
    /// Index into the current room's items.
    Item(usize),
}

/// Result of an attack command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttackOutcome {
    /// What the player sees.
    pub report: Report,
    /// Name of an enemy that was just struck down and may be recruited.
    pub defeated: Option<String>,
}

/// Find an attackable thing named `name` in the player's room.
///
/// Names match exactly, ignoring case. An enemy wins over an item with the
/// same name. Plain items and weapons are never targets.
pub fn find_target(state: &GameState, name: &str) -> FictionResult<Option<AttackTarget>> {
    if let Some(i) = state
        .enemies
        .iter()
        .position(|e| e.is_in(&state.current) && e.is_named(name))
    {
        return Ok(Some(AttackTarget::Enemy(i)));
    }
    let room = state.current_room()?;
    Ok(room
        .items()
        .iter()
        .position(|item| item.is_attackable() && item.is_named(name))
        .map(AttackTarget::Item))
}

fn is_destroyed(state: &GameState, target: AttackTarget) -> FictionResult<bool> {
    Ok(match target {
        AttackTarget::Enemy(i) => state.enemies.get(i).is_none_or(|e| !e.is_alive()),
        AttackTarget::Item(i) => state.current_room()?.item(i).is_none_or(Item::is_destroyed),
    })
}

/// Strike `target` with the carried weapon `weapon`.
pub fn attack(state: &mut GameState, target: &str, weapon: &str) -> FictionResult<AttackOutcome> {
    let target_name = target.to_lowercase();
    let found = find_target(state, target)?;
    let mut report = Report::handled();
    if found.is_none() {
        report.say(format!("There is no {target_name} in this room."));
    }
    let weapon_name = match state.inventory.weapon(weapon) {
        Some(item) => Some(item.name.clone()),
        None => {
            report.say(format!("You don't have {weapon}."));
            None
        }
    };

    let (Some(found), Some(weapon_name)) = (found, weapon_name) else {
        report.say(format!("You cannot attack {target_name} with {weapon}."));
        return Ok(AttackOutcome {
            report,
            defeated: None,
        });
    };
    if is_destroyed(state, found)? {
        report.say(format!("You cannot attack {target_name} with {weapon}."));
        return Ok(AttackOutcome {
            report,
            defeated: None,
        });
    }

    let mut defeated = None;
    let revealed = match found {
        AttackTarget::Enemy(i) => {
            let Some(enemy) = state.enemies.get_mut(i) else {
                return Ok(AttackOutcome::default());
            };
            let revealed = enemy.destroy();
            report.say(format!("{} is struck with {weapon_name}.", enemy.name));
            info!(enemy = %enemy.name, weapon = %weapon_name, "enemy_struck");
            defeated = Some(enemy.name.clone());
            revealed
        }
        AttackTarget::Item(i) => {
            let room = state.current_room_mut()?;
            let Some(item) = room.item_mut(i) else {
                return Ok(AttackOutcome::default());
            };
            let revealed = item.destroy();
            report.say(format!("You destroy the {} with the {weapon_name}.", item.name));
            info!(item = %item.name, weapon = %weapon_name, "item_destroyed");
            revealed
        }
    };

    if let Some(item) = revealed {
        reveal(state, item)?;
    }

    Ok(AttackOutcome { report, defeated })
}

/// Put a replacement item into the player's room.
fn reveal(state: &mut GameState, item: Item) -> FictionResult<()> {
    let room = state.current_room_mut()?;
    if room.find_named(&item.name).is_some() {
        warn!(item = %item.name, room = %room.name, "replacement_lost");
        return Ok(());
    }
    debug!(item = %item.name, room = %room.name, "item_revealed");
    room.add_item(item)?;
    Ok(())
}

/// Move a defeated enemy out of play and into the inventory.
///
/// The report is unhandled when no enemy of that name is in play. An enemy
/// whose name the player already carries stays where it fell.
pub fn recruit(state: &mut GameState, name: &str) -> FictionResult<Report> {
    let Some(i) = state.enemies.iter().position(|e| e.is_named(name)) else {
        return Ok(Report::default());
    };
    if let Some(carried) = state
        .inventory
        .entries()
        .iter()
        .find(|c| delve_core::name::same_name(c.name(), name))
    {
        warn!(enemy = %state.enemies[i].name, carried = %carried.name(), "recruit_refused");
        return Ok(Report::line(format!(
            "You already carry a {}, so {} stays behind.",
            carried.name(),
            state.enemies[i].name
        )));
    }

    let enemy = state.enemies.remove(i);
    let line = format!("Congratulations. {} has joined your party!", enemy.name);
    info!(enemy = %enemy.name, "enemy_recruited");
    state.inventory.add(Carried::Companion(enemy))?;
    Ok(Report::line(line))
}

/// The first live enemy sharing the player's room.
pub fn ambusher(state: &GameState) -> Option<&delve_core::Enemy> {
    state.enemies_here().find(|e| e.is_alive())
}

/// Rooms an enemy in `from` may roam to, in transition order.
pub fn roam_candidates(state: &GameState, from: &RoomId) -> FictionResult<Vec<RoomId>> {
    let mut candidates = Vec::new();
    for transition in state.world.transitions_of(from)? {
        let target = state.world.room(&transition.target)?;
        if !target.is_final {
            candidates.push(transition.target.clone());
        }
    }
    Ok(candidates)
}

/// Relocate every live enemy to a random non-final neighbour.
///
/// An enemy with no eligible neighbour stays where it is. Returns how many
/// enemies moved.
pub fn roam(state: &mut GameState, rng: &mut StdRng) -> FictionResult<usize> {
    let mut moved = 0;
    for i in 0..state.enemies.len() {
        let enemy = &state.enemies[i];
        if !enemy.is_alive() {
            continue;
        }
        let candidates = roam_candidates(state, &enemy.room)?;
        if candidates.is_empty() {
            debug!(enemy = %enemy.name, room = %enemy.room, "enemy_stays");
            continue;
        }
        let to = candidates[rng.random_range(0..candidates.len())].clone();
        let enemy = &mut state.enemies[i];
        debug!(enemy = %enemy.name, from = %enemy.room, to = %to, "enemy_roamed");
        enemy.room = to;
        moved += 1;
    }
    Ok(moved)
}
