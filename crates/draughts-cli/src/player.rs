//! Human players reading moves from a text console.

use draughts_core::{Color, Coord};
use draughts_engine::{Board, InvalidMove, Player, PlayerError};
use std::cell::RefCell;
use std::io::{BufRead, Write};

use crate::render::Renderer;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Parses a sequence of whitespace-separated algebraic coordinates.
///
/// Returns `None` if the input is empty or any token is malformed.
pub fn parse_sequence(input: &str) -> Option<Vec<Coord>> {
    let coords = input
        .split_whitespace()
        .map(Coord::from_algebraic)
        .collect::<Option<Vec<_>>>()?;
    if coords.is_empty() {
        None
    } else {
        Some(coords)
    }
}

/// A text terminal shared by the players sitting at it.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    renderer: Renderer,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, renderer: Renderer, clear_screen: bool) -> Self {
        Console {
            input,
            output,
            renderer,
            clear_screen,
        }
    }

    /// Draws the board, highlighting `selected`.
    pub fn show(&mut self, board: &Board, selected: Option<Coord>) -> std::io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        write!(self.output, "{}", self.renderer.render(board, selected))?;
        self.output.flush()
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn read_line(&mut self) -> Result<String, PlayerError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayerError::InputClosed);
        }
        Ok(line)
    }

    fn ask_selection(&mut self) -> Result<Coord, PlayerError> {
        loop {
            self.say("Select a piece to move")?;
            let line = self.read_line()?;
            match Coord::from_algebraic(line.trim()) {
                Some(coord) => return Ok(coord),
                None => self.say("Invalid selection")?,
            }
        }
    }

    fn ask_moves(&mut self) -> Result<Vec<Coord>, PlayerError> {
        loop {
            self.say("Enter a sequence of moves to make")?;
            let line = self.read_line()?;
            match parse_sequence(&line) {
                Some(moves) => return Ok(moves),
                None => self.say("Invalid sequence")?,
            }
        }
    }

    /// Shows an error and, when the screen is about to be cleared, waits
    /// for the player to press enter.
    fn report(&mut self, error: &InvalidMove) -> Result<(), PlayerError> {
        self.say(&error.to_string())?;
        if self.clear_screen {
            self.say("Press enter to continue")?;
            self.read_line()?;
        }
        Ok(())
    }

    /// Consumes the console, returning its input and output.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// A player typing coordinates at a [`Console`].
///
/// Both sides of a hot-seat game share one console.
#[derive(Debug)]
pub struct HumanPlayer<'a, R, W> {
    console: &'a RefCell<Console<R, W>>,
}

impl<'a, R: BufRead, W: Write> HumanPlayer<'a, R, W> {
    pub fn new(console: &'a RefCell<Console<R, W>>) -> Self {
        HumanPlayer { console }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<'_, R, W> {
    fn get_selection(&mut self, board: &Board, color: Color) -> Result<Coord, PlayerError> {
        let mut console = self.console.borrow_mut();
        console.show(board, None)?;
        console.say(&format!("{}'s turn.", color))?;
        console.ask_selection()
    }

    fn get_moves(
        &mut self,
        board: &Board,
        color: Color,
        selected: Coord,
    ) -> Result<Vec<Coord>, PlayerError> {
        let mut console = self.console.borrow_mut();
        console.show(board, Some(selected))?;
        console.say(&format!("{}'s turn.", color))?;
        console.ask_moves()
    }

    fn rejected(&mut self, error: &InvalidMove) {
        let mut console = self.console.borrow_mut();
        if let Err(err) = console.report(error) {
            tracing::warn!(%err, "could not report rejected move");
        }
    }
}
