//! Command parsing.

mod command;

pub use command::{Command, Direction, parse_command};
