//! Interactive game loop over any line-based reader and writer.

use super::input::{InputError, validate_move};
use super::render;
use crate::games::tictactoe::{Game, GameError, Phase};
use derive_more::{Display, Error, From};
use std::io::{self, BufRead, Write};
use std::str;
use tracing::{debug, error, info, instrument, warn};

/// Errors that end a session early.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Input ended before the game reached a result.
    #[display("Input closed before the game finished")]
    #[from(ignore)]
    InputClosed,

    /// A result was requested while the game is still active.
    #[display("Game is still in progress ({})", _0)]
    #[from(ignore)]
    InProgress(#[error(not(source))] Phase),

    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(io::Error),

    /// The game rejected a move that passed input validation.
    #[display("Internal game error: {}", _0)]
    Game(GameError),
}

/// What one line of input did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move accepted, game continues.
    Accepted,
    /// Input rejected; the same player is prompted again.
    Rejected(InputError),
    /// Move accepted and the game reached a terminal phase.
    Finished(Phase),
}

/// One game of console tic-tac-toe.
pub struct Session<R, W> {
    input: R,
    output: W,
    game: Game,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a new game.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            game: Game::new(),
        }
    }

    /// Current game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the banner and instructions.
    pub fn welcome(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "{}", render::BANNER)?;
        writeln!(self.output, "{}", render::INSTRUCTIONS)?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Prompts the side to move, reads one line, and applies it.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InputClosed`] at end of input
    /// - [`SessionError::Game`] if the game is over or rejects a validated move
    /// - [`SessionError::Io`] on console failure
    #[instrument(skip(self), fields(phase = %self.game.phase()))]
    pub fn step(&mut self) -> Result<Step, SessionError> {
        let player = self.game.phase().to_move().ok_or(GameError::GameOver)?;

        write!(
            self.output,
            "{}{}\n{}",
            render::board(self.game.board()),
            render::turn(player),
            render::PROMPT
        )?;
        self.output.flush()?;

        // Raw bytes: a line that is not UTF-8 is bad input, not an I/O failure.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            warn!("Input closed mid-game");
            return Err(SessionError::InputClosed);
        }

        let checked = str::from_utf8(&buf)
            .map_err(|_| InputError::Unparsable)
            .and_then(|line| validate_move(self.game.board(), line));
        let pos = match checked {
            Ok(pos) => pos,
            Err(e) => {
                let input = String::from_utf8_lossy(&buf);
                warn!(input = input.trim_end(), error = ?e, "Move rejected");
                writeln!(self.output, "{e}")?;
                return Ok(Step::Rejected(e));
            }
        };

        self.game = self.game.play(pos).inspect_err(|e| {
            error!(error = %e, %pos, "Validated move rejected by game");
        })?;
        debug!(%player, %pos, phase = %self.game.phase(), "Move accepted");

        if self.game.is_over() {
            Ok(Step::Finished(self.game.phase()))
        } else {
            Ok(Step::Accepted)
        }
    }

    /// Prints the final board and result line.
    pub fn finish(&mut self) -> Result<Phase, SessionError> {
        let phase = self.game.phase();
        let message = render::result(phase).ok_or(SessionError::InProgress(phase))?;
        write!(self.output, "{}", render::board(self.game.board()))?;
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(phase)
    }

    /// Plays a full game: banner, turns until a result, final board.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Phase, SessionError> {
        info!("Starting tic-tac-toe session");
        self.welcome()?;
        while !self.game.is_over() {
            self.step()?;
        }
        let phase = self.finish()?;
        info!(%phase, plies = self.game.plies(), "Session finished");
        Ok(phase)
    }
}
