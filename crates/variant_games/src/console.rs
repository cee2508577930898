//! Line-based console shared by the menus, the driver and human players.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use tracing::{debug, instrument, warn};
use variant_tictactoe::{BoardView, MoveSource, Proposal, StrategyError};

/// A reader for answers and a writer for prompts and boards.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

/// Console handle shared between both seats and the driver.
pub type SharedConsole<R, W> = Rc<RefCell<Console<R, W>>>;

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Wraps the console for sharing.
    pub fn shared(self) -> SharedConsole<R, W> {
        Rc::new(RefCell::new(self))
    }

    /// Reads one line without its terminator. `None` at end of input.
    #[instrument(skip(self))]
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writes `prompt` without a newline and waits for an answer.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// The underlying writer.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

/// Human move entry over a [`Console`].
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    console: SharedConsole<R, W>,
}

impl<R, W> ConsoleInput<R, W> {
    /// Reads moves from `console`.
    pub fn new(console: SharedConsole<R, W>) -> Self {
        Self { console }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleInput<R, W> {
    #[instrument(skip(self, view), fields(player = %view.player()))]
    fn request_move(&mut self, view: &BoardView<'_>) -> Result<Proposal, StrategyError> {
        let mut console = self.console.borrow_mut();
        let prompt = if view.hide_moves() {
            format!("Player {}, enter your move blind (1-9): ", view.player())
        } else {
            format!("Player {}, enter your move (1-9): ", view.player())
        };

        let line = console
            .prompt(&prompt)
            .map_err(|e| StrategyError::InputClosed(e.to_string()))?
            .ok_or_else(|| StrategyError::InputClosed("end of input".to_string()))?;

        match line.trim().parse::<i32>() {
            Ok(number) => Ok(Proposal::Cell(number)),
            Err(_) => {
                warn!(input = %line, "Non-numeric move");
                writeln!(console, "Invalid input. Please enter a number.")
                    .map_err(|e| StrategyError::InputClosed(e.to_string()))?;
                Ok(Proposal::Retry)
            }
        }
    }
}
