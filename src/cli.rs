//! Command-line interface for tictac_timeline.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "tictac_timeline")]
#[command(about = "Tic-tac-toe with time travel through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay a scripted game and print the resulting view
    Replay {
        /// Cell indices (0-8, row-major) in play order, comma separated
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History step to jump to after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Toggle the history list to descending order
        #[arg(long)]
        descending: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `replay`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Board grid, status line and history list
    #[default]
    Text,
    /// The full view as JSON
    Json,
}
