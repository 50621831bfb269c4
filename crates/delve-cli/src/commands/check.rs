//! Validate a story file.

use std::path::Path;

use colored::Colorize;
use delve_fiction::Story;

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let def = super::load_story(path)?;
    let state = def.build().map_err(|e| e.to_string())?;

    let finals = state.world.rooms().filter(|r| r.is_final).count();
    let items: usize = state.world.rooms().map(|r| r.items().len()).sum();

    println!("  {} '{}'", "Story OK:".green().bold(), state.title);
    println!(
        "  {} rooms ({} final), {} items, {} enemies",
        state.world.room_count(),
        finals,
        items,
        state.enemies.len()
    );
    if finals == 0 {
        println!(
            "  {} no final room; the game can only end by quitting or dying",
            "warning:".yellow()
        );
    }

    Ok(())
}
