//! The input loop.

use std::io::{BufRead, Write};

use tracing::info;

use crate::error::FictionResult;
use crate::narrator;
use crate::session::GameSession;
use crate::state::Ending;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Why the loop stopped.
    pub ending: Ending,
    /// Final score.
    pub score: u32,
}

/// Play `session` to the end, reading lines from `input` and writing text to
/// `output`.
///
/// Running out of input counts as quitting. The final score is always
/// printed unless the loop stops on an error.
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut output: W,
) -> FictionResult<Summary> {
    writeln!(output, "{}", session.state().introduction)?;

    let ending = loop {
        if let Some(ending) = session.state().ending {
            break ending;
        }
        for line in session.prompt()? {
            writeln!(output, "{line}")?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            session.quit();
            continue;
        }

        let outcome = session.process(line.trim_end_matches(['\r', '\n']))?;
        for line in &outcome.lines {
            writeln!(output, "{line}")?;
        }
    };

    let score = session.score();
    writeln!(output, "{}", narrator::final_score(score))?;
    output.flush()?;
    info!(%ending, score, "session_ended");
    Ok(Summary { ending, score })
}
