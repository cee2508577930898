//! Variant Games - console entry point.

#![warn(missing_docs)]

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use variant_games::{Cli, Console, GameConfig, Settings, run_game};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    println!("Welcome to tic-tac-toe");

    let result = play(&cli);
    if let Err(e) = &result {
        error!(error = %e, "Game aborted");
    }
    println!("Thanks for playing!");
    result
}

fn play(cli: &Cli) -> Result<()> {
    let file_config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let config = file_config.merge(cli.overrides());
    info!(?config, "Configuration loaded");

    let console = Console::new(io::stdin().lock(), io::stdout()).shared();
    let Some(settings) = Settings::resolve(config, &console)? else {
        println!("\nBye!");
        return Ok(());
    };

    let mut engine = settings.build_engine(&console)?;
    run_game(&mut engine, &console)?;
    Ok(())
}
