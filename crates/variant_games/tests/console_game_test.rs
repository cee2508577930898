//! End-to-end games through the console driver with scripted input.

use std::io::{Cursor, Write};
use std::rc::Rc;

use variant_games::{Cli, Console, ConsoleInput, GameConfig, Settings, SharedConsole, run_game};
use variant_tictactoe::{
    GameEngine, InteractiveStrategy, OpponentKind, Outcome, Player, ScriptedStrategy, Seat, Variant,
};

type TestConsole = SharedConsole<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).shared()
}

fn output(console: &TestConsole) -> String {
    String::from_utf8(console.borrow().output().clone()).expect("utf-8 output")
}

fn human_vs_script(console: &TestConsole, variant: Variant, opponent_moves: &[i32]) -> GameEngine {
    GameEngine::with_first(
        variant,
        Seat::new("Ada", Player::X, InteractiveStrategy::new(ConsoleInput::new(Rc::clone(console)))),
        Seat::new("Bot", Player::O, ScriptedStrategy::new(opponent_moves.to_vec())),
        Player::X,
    )
    .expect("distinct symbols")
}

#[test]
fn test_classic_game_with_retries() {
    // Ada types garbage, an occupied cell, then wins on the top row.
    let console = console("1\nhello\n4\n2\n3\n");
    let mut engine = human_vs_script(&console, Variant::Classic, &[4, 5]);

    let outcome = run_game(&mut engine, &console).expect("game completes");
    assert_eq!(outcome, Outcome::Winner(Player::X));

    let text = output(&console);
    assert!(text.contains("Let's play! (Classic)"));
    assert!(text.contains("Current player: Ada (X)"));
    assert!(text.contains("Invalid input. Please enter a number."));
    assert!(text.contains("Invalid move: Cell 4 is already occupied"));
    assert!(text.contains("Player X won! Well played, Ada."));
    assert!(text.contains("X X X\nO O -\n- - -"));
}

#[test]
fn test_blind_game_forfeit_and_reveal() {
    // Ada opens at 1, then forfeits with 10, then wins with 2 and 3.
    let console = console("1\n10\n2\n3\n");
    let mut engine = human_vs_script(&console, Variant::Blind, &[5, 9, 7]);

    let outcome = run_game(&mut engine, &console).expect("game completes");
    assert_eq!(outcome, Outcome::Winner(Player::X));

    let text = output(&console);
    assert!(text.contains("enter your move blind (1-9)"));
    assert!(text.contains("Invalid move: Cell 10 is out of range (must be 1-9). Ada (X) has lost the turn."));
    assert!(!text.contains("Ada (X) played"), "blind games do not echo moves");
    assert!(text.contains("What you saw:\nX - -\n- O -\n- - -"));
    assert!(text.contains("What was played:\nX X X\n- O -\nO - O"));
}

#[test]
fn test_limited_memory_reports_erased_cells() {
    // X1 O2 X3 O5 X4 O6 X8 O7
    let console = console("1\n3\n4\n8\n");
    let mut engine = human_vs_script(&console, Variant::LimitedMemory, &[2, 5, 6, 7]);

    let result = run_game(&mut engine, &console);
    assert!(result.is_err(), "input runs out before anyone wins");
    assert_eq!(engine.board().occupied_count(), 6);

    let text = output(&console);
    assert!(text.contains("Cell 1 (X) fades from memory"));
    assert!(text.contains("Cell 2 (O) fades from memory"));
}

#[test]
fn test_menus_fill_missing_settings() {
    let console = console("2\n2\n3\n");
    let settings = Settings::resolve(GameConfig::default(), &console)
        .expect("console works")
        .expect("no quit");

    assert_eq!(*settings.symbol(), Player::O);
    assert_eq!(*settings.opponent(), OpponentKind::Random);
    assert_eq!(*settings.variant(), Variant::Blind);
    assert_eq!(settings.player_name(), "Player O");
    assert_eq!(settings.opponent_name(), "Computer");
}

#[test]
fn test_quit_from_menu() {
    let console = console("1\n0\n");
    let settings = Settings::resolve(GameConfig::default(), &console).expect("console works");
    assert!(settings.is_none());
}

#[test]
fn test_cli_flags_skip_menus_and_seed_is_reproducible() {
    let cli = <Cli as clap::Parser>::try_parse_from([
        "variant_games",
        "--variant",
        "classic",
        "--opponent",
        "random",
        "--symbol",
        "x",
        "--name",
        "Ada",
        "--seed",
        "11",
    ])
    .expect("valid flags");

    let first = {
        let console = console("");
        let settings = Settings::resolve(cli.overrides(), &console)
            .expect("console works")
            .expect("no quit");
        assert_eq!(output(&console), "", "no menu shown");
        let engine = settings.build_engine(&console).expect("engine builds");
        (engine.current_player(), engine.seat(Player::O).name().clone())
    };
    let second = {
        let console = console("");
        let settings = Settings::resolve(cli.overrides(), &console)
            .expect("console works")
            .expect("no quit");
        let engine = settings.build_engine(&console).expect("engine builds");
        (engine.current_player(), engine.seat(Player::O).name().clone())
    };
    assert_eq!(first, second);
    assert_eq!(first.1, "Computer");
}

#[test]
fn test_config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "variant = \"limited-memory\"\nopponent = \"human\"\nseed = 3").expect("write config");

    let config = GameConfig::from_file(file.path()).expect("config loads");
    assert_eq!(*config.variant(), Some(Variant::LimitedMemory));
    assert_eq!(*config.opponent(), Some(OpponentKind::Human));
    assert_eq!(*config.seed(), Some(3));

    let missing = GameConfig::from_file(file.path().with_extension("missing"));
    assert!(missing.is_err());
}
