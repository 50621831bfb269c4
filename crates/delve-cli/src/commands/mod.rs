pub mod check;
pub mod export;
pub mod play;

use std::path::Path;

use delve_fiction::StoryDef;

use crate::story;

/// The story in `path`, or the built-in one.
fn load_story(path: Option<&Path>) -> Result<StoryDef, String> {
    match path {
        Some(path) => StoryDef::from_path(path).map_err(|e| e.to_string()),
        None => story::inheritance().map_err(|e| format!("built-in story is broken: {e}")),
    }
}
