//! Numbered setup menus.

use std::io::{self, BufRead, Write};

use strum::IntoEnumIterator;
use tracing::{debug, instrument};
use variant_tictactoe::{OpponentKind, Player, Variant};

use crate::console::Console;

/// Shows `title` and numbered `options` until a valid choice is entered.
///
/// Option numbers start at 1; `0` quits. Returns `None` on quit or end of input.
#[instrument(skip(console, options))]
pub fn choose<T: Copy, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
    options: &[(&str, T)],
) -> io::Result<Option<T>> {
    loop {
        writeln!(console)?;
        writeln!(console, "{}", title)?;
        for (index, (label, _)) in options.iter().enumerate() {
            writeln!(console, "{}. {}", index + 1, label)?;
        }
        writeln!(console, "0. Quit")?;

        let Some(line) = console.prompt("Enter your choice: ")? else {
            return Ok(None);
        };

        match line.trim().parse::<usize>() {
            Ok(0) => {
                debug!("Quit selected");
                return Ok(None);
            }
            Ok(choice) if choice <= options.len() => return Ok(Some(options[choice - 1].1)),
            _ => writeln!(
                console,
                "Invalid input. Please enter a number between 0 and {}.",
                options.len()
            )?,
        }
    }
}

/// Asks the local player for a symbol.
pub fn choose_symbol<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<Player>> {
    choose(console, "Choose your symbol", &[("X", Player::X), ("O", Player::O)])
}

/// Asks who the opponent is.
pub fn choose_opponent<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<OpponentKind>> {
    choose(
        console,
        "Choose your opponent",
        &[
            ("Human", OpponentKind::Human),
            ("Computer (random moves)", OpponentKind::Random),
        ],
    )
}

/// Asks which variant to play.
pub fn choose_variant<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<Variant>> {
    let options: Vec<_> = Variant::iter().map(|variant| (variant.label(), variant)).collect();
    choose(console, "Which kind of play do you want?", &options)
}
