//! Variant Games - console tic-tac-toe.
//!
//! Thin I/O around the [`variant_tictactoe`] engine:
//!
//! - **Cli / Config**: flags layered over an optional TOML file
//! - **Menus**: interactive setup for anything left unset
//! - **Console**: shared line reader used by menus and human players
//! - **Driver**: the game loop printing turns, boards and results

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod driver;
pub mod menu;
mod setup;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use console::{Console, ConsoleInput, SharedConsole};
pub use driver::run_game;
pub use setup::Settings;
