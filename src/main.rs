use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::io;
use std::path::PathBuf;

use vidplayer::catalog::VideoCatalog;
use vidplayer::console::Repl;
use vidplayer::player::{MediaPlayerBuilder, PlaybackEvent, PlaybackEventHandler};
use vidplayer::utils;

/// vidplayer - a command-driven video player
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog file (`title | id | tags` lines, or a .json array)
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for PLAY_RANDOM
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let config = utils::load_config(args.config.as_deref())?;

    // Initialize logging
    let log_level = if args.debug { "debug" } else { config.general.log_level.as_str() };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting vidplayer v{}", env!("CARGO_PKG_VERSION"));

    // Load the library
    let catalog = match args.catalog.as_ref().or(config.library.catalog_path.as_ref()) {
        Some(path) => VideoCatalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => VideoCatalog::builtin()?,
    };

    // Build media player
    let player = MediaPlayerBuilder::new()
        .with_catalog(catalog)
        .with_seed(args.seed.or(config.player.random_seed))
        .with_event_handler(Box::new(LoggingEventHandler))
        .build()?;

    let stdin = io::stdin();
    let mut repl = Repl::new(player, stdin.lock(), io::stdout().lock())
        .with_prompt(config.console.prompt.clone());

    if config.console.show_banner && !args.no_banner {
        repl.banner()?;
    }

    repl.run()?;
    Ok(())
}

/// Event handler that logs events
struct LoggingEventHandler;

impl PlaybackEventHandler for LoggingEventHandler {
    fn handle_event(&mut self, event: &PlaybackEvent) {
        match event {
            PlaybackEvent::AlreadyPaused(id) => {
                log::debug!("Pause ignored, {} already paused", id);
            }
            _ => info!("Playback event: {:?}", event),
        }
    }
}
