//! Timetoe - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use timetoe::{AppConfig, Cli, Command, ConfigSource, OutputFormat, parse_moves, render, replay};
use timetoe_engine::SortOrder;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // Loaded before any subscriber exists; the source is logged once one does.
    let (config, source) = AppConfig::load_or_default(&cli.config)?;

    match cli.command() {
        Command::Play { order } => run_play(config, source, order),
        Command::Replay {
            moves,
            jump,
            order,
            format,
        } => run_replay(config, source, &moves, jump, order, format),
    }
}

/// Run the terminal UI, logging to the configured file.
fn run_play(config: AppConfig, source: ConfigSource, order: Option<SortOrder>) -> Result<()> {
    // Log to a file so tracing output doesn't corrupt the TUI.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let config = match order {
        Some(order) => config.with_sort_order(order),
        None => config,
    };
    info!(%source, ?config, "Configuration resolved");

    timetoe::tui::run_tui(*config.sort_order())
}

/// Replay a move list and print the result to stdout.
fn run_replay(
    config: AppConfig,
    source: ConfigSource,
    moves: &str,
    jump: Option<usize>,
    order: Option<SortOrder>,
    format: OutputFormat,
) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::io::stderr)
        .try_init();
    debug!(%source, ?config, "Configuration resolved");

    let order = order.unwrap_or(*config.sort_order());
    let moves = parse_moves(moves)?;
    let history = replay(&moves, jump)?;
    println!("{}", render(&history, order, format)?);
    Ok(())
}

/// `RUST_LOG` wins over the configured filter.
fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}
