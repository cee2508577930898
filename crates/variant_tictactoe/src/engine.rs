//! Turn-based game engine.
//!
//! The engine owns the board and all game state. Each call to
//! [`GameEngine::play_turn`] runs one turn:
//!
//! 1. ask the current player's strategy for a cell,
//! 2. validate it, retrying or forfeiting per the variant,
//! 3. run the variant's pre-move hook and record the move,
//! 4. place the symbol,
//! 5. check for a win or a tie, otherwise hand the turn over.

use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::action::{Move, MoveError, PlayError, SetupError, StrategyError};
use crate::cell::Cell;
use crate::history::MoveHistory;
use crate::rules::check_win;
use crate::strategy::{BoardView, Strategy};
use crate::types::{Board, Player, Square};
use crate::variant::{InvalidMovePolicy, Variant, VariantRules, MEMORY_WINDOW};

// ─────────────────────────────────────────────────────────────
//  Status and reports
// ─────────────────────────────────────────────────────────────

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended with a full board and no winner.
    Tied,
}

impl GameStatus {
    /// True for `Won` and `Tied`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a tie.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} won!", player),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// A proposal turned down during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    /// The raw cell number proposed.
    pub proposal: i32,
    /// Why it was turned down.
    pub error: MoveError,
}

/// What the turn did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// A symbol was placed.
    Placed {
        /// The applied move.
        mv: Move,
        /// Move erased by the limited-memory window, if any.
        erased: Option<Move>,
    },
    /// The player lost the turn to an invalid move.
    Forfeited {
        /// Why the move was invalid.
        error: MoveError,
    },
}

/// Everything that happened during one call to [`GameEngine::play_turn`].
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TurnReport {
    /// Player whose turn it was.
    player: Player,
    /// Invalid proposals that were retried before the final action.
    rejected: Vec<Rejection>,
    /// Final action of the turn.
    action: TurnAction,
    /// Status after the turn.
    status: GameStatus,
}

impl TurnReport {
    /// True if the player lost the turn.
    pub fn is_forfeit(&self) -> bool {
        matches!(self.action, TurnAction::Forfeited { .. })
    }
}

/// End-of-game comparison of what players saw and what was played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    /// The board as displayed during play.
    pub visible: Board,
    /// The true board.
    pub actual: Board,
}

// ─────────────────────────────────────────────────────────────
//  Seats
// ─────────────────────────────────────────────────────────────

/// A participant: display name, symbol and move strategy.
#[derive(Getters)]
pub struct Seat {
    /// Display name.
    name: String,
    /// Symbol this seat plays.
    player: Player,
    /// Source of moves.
    #[getter(skip)]
    strategy: Box<dyn Strategy>,
}

impl Seat {
    /// Creates a seat.
    pub fn new(name: impl Into<String>, player: Player, strategy: impl Strategy + 'static) -> Self {
        Self {
            name: name.into(),
            player,
            strategy: Box::new(strategy),
        }
    }
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seat")
            .field("name", &self.name)
            .field("player", &self.player)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────────
//  Engine
// ─────────────────────────────────────────────────────────────

/// Tic-tac-toe game engine.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    rules: VariantRules,
    seats: [Seat; 2],
    current: Player,
    status: GameStatus,
    history: MoveHistory,
    turns_played: usize,
}

impl GameEngine {
    /// Creates a game whose starting seat is drawn uniformly from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::DuplicateSymbol`] if both seats play the same symbol.
    #[instrument(skip(first, second, rng))]
    pub fn new<R: Rng>(
        variant: Variant,
        first: Seat,
        second: Seat,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        let starting = if rng.random_bool(0.5) {
            first.player
        } else {
            second.player
        };
        Self::with_first(variant, first, second, starting)
    }

    /// Creates a game with a fixed starting player.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::DuplicateSymbol`] if both seats play the same symbol.
    #[instrument(skip(first, second))]
    pub fn with_first(
        variant: Variant,
        first: Seat,
        second: Seat,
        starting: Player,
    ) -> Result<Self, SetupError> {
        if first.player == second.player {
            warn!(symbol = %first.player, "Rejected seats sharing a symbol");
            return Err(SetupError::DuplicateSymbol(first.player));
        }

        info!(%variant, %starting, first = %first.name, second = %second.name, "Starting game");
        Ok(Self {
            board: Board::new(),
            rules: VariantRules::new(variant),
            seats: [first, second],
            current: starting,
            status: GameStatus::InProgress,
            history: MoveHistory::unbounded(),
            turns_played: 0,
        })
    }

    /// Plays one turn for the current player.
    ///
    /// # Errors
    ///
    /// - [`PlayError::MoveAfterGameOver`] once the game is won or tied.
    /// - [`PlayError::StrategyContractViolation`] if the strategy found no empty cell.
    /// - [`PlayError::Strategy`] if the strategy could not produce a move.
    ///
    /// The engine is unchanged whenever an error is returned.
    #[instrument(skip(self), fields(player = %self.current, variant = %self.rules.variant()))]
    pub fn play_turn(&mut self) -> Result<TurnReport, PlayError> {
        if self.is_over() {
            warn!(status = ?self.status, "Turn requested after game over");
            return Err(PlayError::MoveAfterGameOver);
        }

        let player = self.current;
        if !self.board.has_empty_cell() {
            return Err(PlayError::StrategyContractViolation(player));
        }

        let seat = self.seat_index(player);
        let hide_moves = self.rules.hides_board();
        let mut rejected = Vec::new();

        let cell = loop {
            let view = BoardView::new(&self.board, player, hide_moves);
            let proposal = self.seats[seat]
                .strategy
                .propose_move(&view)
                .map_err(|source| match source {
                    StrategyError::NoEmptyCells => PlayError::StrategyContractViolation(player),
                    source => PlayError::Strategy { player, source },
                })?;
            debug!(strategy = self.seats[seat].strategy.name(), proposal, "Received proposal");

            match self.validate(proposal) {
                Ok(cell) => break cell,
                Err(error) => match self.rules.invalid_move_policy() {
                    InvalidMovePolicy::Retry => {
                        debug!(proposal, %error, "Invalid move, asking again");
                        rejected.push(Rejection { proposal, error });
                    }
                    InvalidMovePolicy::Forfeit => {
                        info!(proposal, %error, "Invalid move, turn forfeited");
                        self.current = player.opponent();
                        self.turns_played += 1;
                        return Ok(TurnReport {
                            player,
                            rejected,
                            action: TurnAction::Forfeited { error },
                            status: self.status,
                        });
                    }
                },
            }
        };

        let mv = Move::new(player, cell);
        self.history.push(mv);
        let erased = self.rules.before_move(mv, &mut self.board);
        self.board.place(cell, Square::Occupied(player));
        self.turns_played += 1;
        debug!(%mv, ?erased, "Move applied");

        self.after_move(player);
        self.assert_invariants();

        Ok(TurnReport {
            player,
            rejected,
            action: TurnAction::Placed { mv, erased },
            status: self.status,
        })
    }

    /// Checks a raw proposal against the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRangeCell`] or [`MoveError::OccupiedCell`].
    #[instrument(skip(self))]
    pub fn validate(&self, proposal: i32) -> Result<Cell, MoveError> {
        let cell = Cell::new(proposal)?;
        if self.board.is_empty(cell) {
            Ok(cell)
        } else {
            Err(MoveError::OccupiedCell(cell))
        }
    }

    /// Settles the status after `player` moved.
    fn after_move(&mut self, player: Player) {
        if check_win(&self.board, player) {
            info!(%player, turns = self.turns_played, "Game won");
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            info!(turns = self.turns_played, "Game tied");
            self.status = GameStatus::Tied;
        } else {
            self.current = player.opponent();
        }
    }

    /// Board occupancy must match the recorded moves.
    fn assert_invariants(&self) {
        let expected = match self.rules {
            VariantRules::LimitedMemory { .. } => self.history.len().min(MEMORY_WINDOW),
            _ => self.history.len(),
        };
        debug_assert_eq!(
            self.board.occupied_count(),
            expected,
            "Board occupancy diverged from move history"
        );
    }

    fn seat_index(&self, player: Player) -> usize {
        if self.seats[0].player == player { 0 } else { 1 }
    }

    /// The seat playing `player`.
    pub fn seat(&self, player: Player) -> &Seat {
        &self.seats[self.seat_index(player)]
    }

    /// Both seats in registration order.
    pub fn seats(&self) -> &[Seat; 2] {
        &self.seats
    }

    /// The variant being played.
    pub fn variant(&self) -> Variant {
        self.rules.variant()
    }

    /// Variant rules and their state.
    pub fn rules(&self) -> &VariantRules {
        &self.rules
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or tied.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The result, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Tied => Some(Outcome::Tie),
        }
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|outcome| outcome.winner())
    }

    /// Player to move. After the game ends this is the player who moved last.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// The true board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board as players see it.
    pub fn visible_board(&self) -> Board {
        self.rules.visible_board(&self.board)
    }

    /// Every applied move, oldest first. Forfeited turns are not recorded.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Turns taken, forfeits included.
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// For a finished blind game, the in-play view next to the true board.
    pub fn reveal(&self) -> Option<Reveal> {
        (self.rules.hides_board() && self.is_over()).then(|| Reveal {
            visible: self.visible_board(),
            actual: self.board.clone(),
        })
    }
}
