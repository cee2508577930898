//! Player and game setup.

use std::io::{BufRead, Write};

use anyhow::Result;
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument};
use variant_tictactoe::{
    GameEngine, InteractiveStrategy, OpponentKind, Player, RandomStrategy, Seat, Variant,
};

use crate::config::GameConfig;
use crate::console::{ConsoleInput, SharedConsole};
use crate::menu;

/// Fully resolved game settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Settings {
    /// Game variant.
    variant: Variant,
    /// Opponent kind.
    opponent: OpponentKind,
    /// Symbol of the local player.
    symbol: Player,
    /// Display name of the local player.
    player_name: String,
    /// Display name of the opponent.
    opponent_name: String,
    /// Seed for reproducible games.
    seed: Option<u64>,
}

impl Settings {
    /// Completes `config`, asking on the console for anything unset.
    ///
    /// Returns `None` if the player quits from a menu.
    #[instrument(skip(config, console))]
    pub fn resolve<R: BufRead, W: Write>(
        config: GameConfig,
        console: &SharedConsole<R, W>,
    ) -> Result<Option<Self>> {
        let mut console = console.borrow_mut();

        let symbol = match config.symbol() {
            Some(symbol) => Some(*symbol),
            None => menu::choose_symbol(&mut *console)?,
        };
        let Some(symbol) = symbol else {
            return Ok(None);
        };

        let opponent = match config.opponent() {
            Some(opponent) => Some(*opponent),
            None => menu::choose_opponent(&mut *console)?,
        };
        let Some(opponent) = opponent else {
            return Ok(None);
        };

        let variant = match config.variant() {
            Some(variant) => Some(*variant),
            None => menu::choose_variant(&mut *console)?,
        };
        let Some(variant) = variant else {
            return Ok(None);
        };

        let player_name = config
            .player_name()
            .clone()
            .unwrap_or_else(|| format!("Player {}", symbol));
        let opponent_name = config.opponent_name().clone().unwrap_or_else(|| match opponent {
            OpponentKind::Human => format!("Player {}", symbol.opponent()),
            OpponentKind::Random => "Computer".to_string(),
        });

        let settings = Self {
            variant,
            opponent,
            symbol,
            player_name,
            opponent_name,
            seed: *config.seed(),
        };
        info!(?settings, "Settings resolved");
        Ok(Some(settings))
    }

    /// Builds the engine: the local player on the console, the opponent per settings.
    #[instrument(skip(self, console), fields(variant = %self.variant, opponent = %self.opponent))]
    pub fn build_engine<R, W>(&self, console: &SharedConsole<R, W>) -> Result<GameEngine>
    where
        R: BufRead + 'static,
        W: Write + 'static,
    {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let local = Seat::new(
            self.player_name.clone(),
            self.symbol,
            InteractiveStrategy::new(ConsoleInput::new(console.clone())),
        );
        let other_symbol = self.symbol.opponent();
        let opponent = match self.opponent {
            OpponentKind::Human => Seat::new(
                self.opponent_name.clone(),
                other_symbol,
                InteractiveStrategy::new(ConsoleInput::new(console.clone())),
            ),
            OpponentKind::Random => Seat::new(
                self.opponent_name.clone(),
                other_symbol,
                RandomStrategy::seeded(rng.random()),
            ),
        };

        Ok(GameEngine::new(self.variant, local, opponent, &mut rng)?)
    }
}
