//! tictac_timeline - tic-tac-toe with a navigable move history
//!
//! The game rules and history live in [`tictac_timeline_core`]; this crate
//! adds the renderers and the ambient pieces around them.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with defaults ([`AppConfig`])
//! - **CLI**: `play` and `replay` subcommands ([`Cli`])
//! - **TUI**: interactive ratatui renderer ([`tui`])
//! - **Replay**: headless scripted games ([`replay`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use replay::{Script, render_text};
