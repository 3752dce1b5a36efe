//! tictac_timeline - unified CLI
//!
//! Plays tic-tac-toe in the terminal or replays a scripted game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictac_timeline::{AppConfig, Cli, Command, OutputFormat, Script, render_text, replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay {
            moves,
            jump,
            descending,
            format,
        } => run_replay(
            &config,
            Script {
                moves,
                jump,
                descending,
            },
            format,
        ),
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the interactive terminal game
fn run_play(config: &AppConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tui::run_tui(config)
}

/// Replay a scripted game and print the result
fn run_replay(config: &AppConfig, script: Script, format: OutputFormat) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();

    info!(moves = ?script.moves, jump = ?script.jump, "Replaying game");
    let view = replay::run(&script, *config.sort_order()).context("Replay failed")?;

    match format {
        OutputFormat::Text => print!("{}", render_text(&view)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
            println!("{}", json);
        }
    }
    Ok(())
}
