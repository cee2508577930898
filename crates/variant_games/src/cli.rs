//! Command-line interface for variant_games.

use clap::Parser;
use variant_tictactoe::{OpponentKind, Player, Variant};

use crate::config::GameConfig;

/// Console tic-tac-toe with classic, limited-memory and blind modes.
///
/// Options left unset here or in the config file are asked interactively.
#[derive(Parser, Debug)]
#[command(name = "variant_games")]
#[command(about = "Console tic-tac-toe with classic, limited-memory and blind modes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Game variant (classic, limited-memory, blind)
    #[arg(short, long)]
    pub variant: Option<Variant>,

    /// Opponent kind (human, random)
    #[arg(short, long)]
    pub opponent: Option<OpponentKind>,

    /// Your symbol (x, o)
    #[arg(short, long)]
    pub symbol: Option<Player>,

    /// Your display name
    #[arg(long)]
    pub name: Option<String>,

    /// Opponent display name
    #[arg(long)]
    pub opponent_name: Option<String>,

    /// Seed for the starting player and the computer opponent
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Settings given on the command line, to be layered over the config file.
    pub fn overrides(&self) -> GameConfig {
        GameConfig::new(
            self.variant,
            self.opponent,
            self.symbol,
            self.name.clone(),
            self.opponent_name.clone(),
            self.seed,
        )
    }
}
