//! Play session: one game state, its RNG, and its save slot.

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::combat;
use crate::config::GameConfig;
use crate::error::FictionResult;
use crate::narrator;
use crate::parser::{Command, parse_command};
use crate::persistence::{JsonFileSlot, SaveSlot};
use crate::resolver::{self, Report};
use crate::state::{Ending, GameState};
use crate::story::Story;

/// What one line of input produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Lines to show the player.
    pub lines: Vec<String>,
    /// Set when this input ended the game.
    pub ending: Option<Ending>,
}

/// An interactive play session.
pub struct GameSession {
    state: GameState,
    rng: StdRng,
    slot: Box<dyn SaveSlot>,
    /// A struck-down enemy waiting for the recruit answer.
    recruit: Option<String>,
}

impl GameSession {
    /// Create a session saving to the configured file.
    pub fn new(state: GameState, config: &GameConfig) -> Self {
        let slot = JsonFileSlot::new(config.save_path.clone());
        Self::with_slot(state, config, Box::new(slot))
    }

    /// Create a session with a custom save slot.
    pub fn with_slot(state: GameState, config: &GameConfig, slot: Box<dyn SaveSlot>) -> Self {
        info!(
            title = %state.title,
            room = %state.current,
            seed = ?config.seed,
            slot = %slot.location(),
            "session_started"
        );
        Self {
            state,
            rng: config.rng(),
            slot,
            recruit: None,
        }
    }

    /// Build a story and start a session on it.
    pub fn start(story: &dyn Story, config: &GameConfig) -> FictionResult<Self> {
        Ok(Self::new(story.build()?, config))
    }

    /// The game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// The text to show before reading the next input.
    ///
    /// While a recruit question is open this is the question alone.
    /// Otherwise it is any pending enemy announcements followed by the room.
    pub fn prompt(&mut self) -> FictionResult<Vec<String>> {
        if let Some(name) = &self.recruit {
            return Ok(vec![format!(
                "Do you want to take {name} into the circle?(Y/N) "
            )]);
        }
        let mut lines = Vec::new();
        if self.state.announce_enemies {
            self.state.announce_enemies = false;
            lines.extend(narrator::enemy_whereabouts(&self.state));
        }
        lines.extend(narrator::describe_current(&self.state)?);
        Ok(lines)
    }

    /// End the game at the player's request.
    pub fn quit(&mut self) {
        self.state.end(Ending::Quit);
    }

    /// Handle one line of input.
    ///
    /// Only a failed `load` is an error; everything else, including a failed
    /// save, is reported as text.
    pub fn process(&mut self, input: &str) -> FictionResult<Outcome> {
        if self.state.is_over() {
            return Ok(self.outcome(Vec::new()));
        }
        if let Some(name) = self.recruit.take() {
            return self.answer_recruit(name, input);
        }

        let command = parse_command(input);
        debug!(?command, "command_parsed");

        let mut report = Report::default();
        match command {
            Command::Quit => {
                self.quit();
                return Ok(self.outcome(Vec::new()));
            }
            Command::PickUp { item } => report.merge(resolver::pick_up(&mut self.state, &item)?),
            Command::Drop { item } => report.merge(resolver::drop_item(&mut self.state, &item)?),
            Command::Describe { target } => {
                let report = resolver::describe(&self.state, &target)?;
                return Ok(self.outcome(report.lines));
            }
            Command::Attack { target, weapon } => {
                let outcome = combat::attack(&mut self.state, &target, &weapon)?;
                report.merge(outcome.report);
                self.recruit = outcome.defeated;
            }
            Command::Save => report.merge(self.save()),
            Command::Load => return self.load(),
            Command::Unrecognized { .. } => {
                report.say("You don't find that item, enemy, or weapon.");
            }
            Command::Move { .. } => {}
        }

        // Any input may also be a transition token, whatever else it did.
        // Tokens match verbatim, surrounding whitespace included.
        report.merge(resolver::travel(&mut self.state, input, &mut self.rng)?);
        if !report.handled {
            report.say("Invalid action.");
        }

        if !self.state.is_over() {
            let room = self.state.current_room()?;
            if room.is_final {
                report.lines.extend(narrator::room_lines(room));
                info!(room = %room.name, "final_room_reached");
                self.state.end(Ending::FinalRoom);
            }
        }

        Ok(self.outcome(report.lines))
    }

    fn answer_recruit(&mut self, name: String, input: &str) -> FictionResult<Outcome> {
        let line = match input.trim().to_lowercase().as_str() {
            "y" => {
                let report = combat::recruit(&mut self.state, &name)?;
                return Ok(self.outcome(report.lines));
            }
            "n" => {
                debug!(enemy = %name, "recruit_declined");
                return Ok(self.outcome(Vec::new()));
            }
            _ => {
                self.recruit = Some(name);
                "Invalid input. Try again.".to_string()
            }
        };
        Ok(self.outcome(vec![line]))
    }

    fn save(&mut self) -> Report {
        match self.slot.save(&self.state) {
            Ok(()) => {
                info!(slot = %self.slot.location(), score = self.state.score(), "game_saved");
                Report::line("Save complete!")
            }
            Err(err) => {
                warn!(error = %err, "save_failed");
                Report::line(format!("Save failed: {err}"))
            }
        }
    }

    fn load(&mut self) -> FictionResult<Outcome> {
        let state = self
            .slot
            .load()
            .inspect_err(|err| warn!(error = %err, "load_failed"))?;
        info!(
            slot = %self.slot.location(),
            room = %state.current,
            score = state.score(),
            "game_loaded"
        );
        self.state = state;
        self.recruit = None;
        Ok(self.outcome(vec!["Loaded!".to_string()]))
    }

    fn outcome(&self, lines: Vec<String>) -> Outcome {
        Outcome {
            lines,
            ending: self.state.ending,
        }
    }
}
