//! Play a story on stdin/stdout.

use std::io;
use std::path::Path;

use delve_fiction::{GameConfig, GameSession};

pub fn run(story: Option<&Path>, seed: Option<u64>, save_file: &Path) -> Result<(), String> {
    let def = super::load_story(story)?;

    let mut config = GameConfig::default().with_save_path(save_file);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut session = GameSession::start(&def, &config).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    delve_fiction::run(&mut session, stdin.lock(), io::stdout().lock())
        .map(|_| ())
        .map_err(|e| e.to_string())
}
