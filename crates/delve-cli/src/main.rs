//! Command-line player for Delve text adventures.

mod commands;
mod story;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use delve_fiction::config::DEFAULT_SAVE_FILE;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "delve",
    about = "Delve: a text adventure interpreter",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story (the default when no subcommand is given)
    Play {
        /// RNG seed for reproducible enemy movement
        #[arg(short, long)]
        seed: Option<u64>,

        /// File used by the save and load commands
        #[arg(long, default_value = DEFAULT_SAVE_FILE)]
        save_file: PathBuf,

        /// Story file to play instead of the built-in story
        #[arg(long)]
        story: Option<PathBuf>,
    },

    /// Validate a story file (default: the built-in story)
    Check {
        /// Story file to validate
        story: Option<PathBuf>,
    },

    /// Write a story as JSON (default: the built-in story)
    Export {
        /// Story file to re-export
        #[arg(long)]
        story: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Send logs to stderr so game text on stdout stays clean.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let command = cli.command.unwrap_or_else(|| Commands::Play {
        seed: None,
        save_file: PathBuf::from(DEFAULT_SAVE_FILE),
        story: None,
    });

    let result = match command {
        Commands::Play {
            seed,
            save_file,
            story,
        } => commands::play::run(story.as_deref(), seed, &save_file),
        Commands::Check { story } => commands::check::run(story.as_deref()),
        Commands::Export { story, output } => {
            commands::export::run(story.as_deref(), output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
