//! Game configuration loaded from TOML and command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use variant_tictactoe::{OpponentKind, Player, Variant};

/// Partial game settings. Unset fields are asked for at startup.
///
/// ```toml
/// variant = "limited-memory"
/// opponent = "random"
/// symbol = "x"
/// player_name = "Ada"
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Game variant.
    variant: Option<Variant>,
    /// Opponent kind.
    opponent: Option<OpponentKind>,
    /// Symbol of the local player.
    symbol: Option<Player>,
    /// Display name of the local player.
    player_name: Option<String>,
    /// Display name of the opponent.
    opponent_name: Option<String>,
    /// Seed for reproducible games.
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration from explicit values.
    pub fn new(
        variant: Option<Variant>,
        opponent: Option<OpponentKind>,
        symbol: Option<Player>,
        player_name: Option<String>,
        opponent_name: Option<String>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            variant,
            opponent,
            symbol,
            player_name,
            opponent_name,
            seed,
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Layers `overrides` on top of `self`; set fields in `overrides` win.
    #[instrument(skip(self, overrides))]
    pub fn merge(self, overrides: GameConfig) -> Self {
        Self {
            variant: overrides.variant.or(self.variant),
            opponent: overrides.opponent.or(self.opponent),
            symbol: overrides.symbol.or(self.symbol),
            player_name: overrides.player_name.or(self.player_name),
            opponent_name: overrides.opponent_name.or(self.opponent_name),
            seed: overrides.seed.or(self.seed),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = GameConfig::from_toml(
            r#"
            variant = "blind"
            opponent = "random"
            symbol = "o"
            player_name = "Ada"
            opponent_name = "Hal"
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(*config.variant(), Some(Variant::Blind));
        assert_eq!(*config.opponent(), Some(OpponentKind::Random));
        assert_eq!(*config.symbol(), Some(Player::O));
        assert_eq!(config.player_name().as_deref(), Some("Ada"));
        assert_eq!(*config.seed(), Some(7));
    }

    #[test]
    fn test_empty_config_is_all_unset() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let error = GameConfig::from_toml("colour = \"red\"").unwrap_err();
        assert!(error.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_bad_variant_rejected() {
        assert!(GameConfig::from_toml("variant = \"speed\"").is_err());
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = GameConfig::new(Some(Variant::Classic), Some(OpponentKind::Human), None, None, None, Some(1));
        let flags = GameConfig::new(Some(Variant::Blind), None, Some(Player::X), None, None, None);
        let merged = file.merge(flags);
        assert_eq!(*merged.variant(), Some(Variant::Blind));
        assert_eq!(*merged.opponent(), Some(OpponentKind::Human));
        assert_eq!(*merged.symbol(), Some(Player::X));
        assert_eq!(*merged.seed(), Some(1));
    }
}
