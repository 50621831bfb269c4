//! Command parsing for player input.
//!
//! Parsing is purely syntactic: nothing here looks at the game state. Any
//! line that carries no command prefix becomes a [`Command::Move`] and is
//! resolved against the current room's transitions later.

/// The movement words every story understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// Parse a direction. Only the lowercase literal words are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "north" => Some(Self::North),
            "south" => Some(Self::South),
            "east" => Some(Self::East),
            "west" => Some(Self::West),
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Follow a transition token (a direction or a story-specific phrase).
    Move {
        /// The raw input, matched verbatim against transitions.
        token: String,
    },
    /// Pick up an item from the current room.
    PickUp {
        /// Phrase that should mention the item's name.
        item: String,
    },
    /// Drop a carried item into the current room.
    Drop {
        /// Phrase that should mention the item's name.
        item: String,
    },
    /// Describe a carried item or one in the room.
    Describe {
        /// Phrase that should mention the item's name.
        target: String,
    },
    /// Attack a target with a weapon.
    Attack {
        /// Name of the enemy or destructible item.
        target: String,
        /// Name of the carried weapon.
        weapon: String,
    },
    /// Write the game to the save slot.
    Save,
    /// Replace the game with the one in the save slot.
    Load,
    /// Leave the game.
    Quit,
    /// A malformed command.
    Unrecognized {
        /// The original input.
        input: String,
    },
}

const QUIT: &str = "quit";
const PICK_UP: &str = "pick up";
const DROP: &str = "drop";
const DESCRIBE: &str = "describe";
const ATTACK: &str = "attack";
const SAVE: &str = "save";
const LOAD: &str = "load";

/// Parse a player input line into a command.
///
/// Command words are matched as literal, case-sensitive prefixes.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.starts_with(QUIT) {
        return Command::Quit;
    }
    if let Some(rest) = input.strip_prefix(PICK_UP) {
        return Command::PickUp {
            item: rest.trim().to_string(),
        };
    }
    if let Some(rest) = input.strip_prefix(DROP) {
        return Command::Drop {
            item: rest.trim().to_string(),
        };
    }
    if let Some(rest) = input.strip_prefix(DESCRIBE) {
        return Command::Describe {
            target: rest.trim().to_string(),
        };
    }
    if input.starts_with(ATTACK) {
        return parse_attack(input);
    }
    if input.starts_with(SAVE) {
        return Command::Save;
    }
    if input.starts_with(LOAD) {
        return Command::Load;
    }

    Command::Move {
        token: input.to_string(),
    }
}

/// `attack <target> with <weapon>`, keywords case-insensitive.
///
/// The split happens at the last "with", so a target may itself contain
/// the word.
fn parse_attack(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    let unrecognized = || Command::Unrecognized {
        input: input.to_string(),
    };

    if !words[0].eq_ignore_ascii_case(ATTACK) {
        return unrecognized();
    }
    let rest = &words[1..];
    let Some(split) = rest.iter().rposition(|w| w.eq_ignore_ascii_case("with")) else {
        return unrecognized();
    };

    let target = rest[..split].join(" ");
    let weapon = rest[split + 1..].join(" ");
    if target.is_empty() || weapon.is_empty() {
        return unrecognized();
    }

    Command::Attack { target, weapon }
}
