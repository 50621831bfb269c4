//! Write a story definition out as JSON.

use std::path::Path;

pub fn run(story: Option<&Path>, output: Option<&Path>) -> Result<(), String> {
    let def = super::load_story(story)?;
    let content = def.to_json().map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, format!("{content}\n"))
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
