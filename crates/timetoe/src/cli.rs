//! Command-line interface for timetoe.

use crate::replay::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timetoe_engine::SortOrder;

/// Timetoe - tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "timetoe")]
#[command(about = "Tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "timetoe.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Initial move list order (asc or desc), overrides the config file
        #[arg(long)]
        order: Option<SortOrder>,
    },

    /// Apply a move list and print the resulting game
    Replay {
        /// Moves as indices 0-8 or labels, separated by commas or spaces
        moves: String,

        /// Step to jump to before printing
        #[arg(long)]
        jump: Option<usize>,

        /// Move list order (asc or desc), overrides the config file
        #[arg(long)]
        order: Option<SortOrder>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Cli {
    /// The command to run, falling back to `play`.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Play { order: None })
    }
}
