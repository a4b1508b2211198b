//! Implements game-level Othello logic: turn order, passes and the end of the game.
//!
//! [`Board`] only knows whether a single placement is legal. [`Game`] adds
//! whose turn it is, when a pass is allowed, and how a finished game is scored.

use crate::board::{Board, IllegalMove, PositionSet, Score};
use crate::location::Position;
use crate::piece::Color;
use crate::NUM_SPACES;
use derive_more::{Display, Error};
use std::fmt;
use tracing::debug;

/// An action in an Othello game: place a piece, pass, or give up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Place(Position),
    Pass,
    Quit,
}

impl From<Position> for Action {
    fn from(pos: Position) -> Self {
        Self::Place(pos)
    }
}

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// Every square is taken.
    BoardFull,
    /// Neither side could move, so both passed in a row.
    Blocked,
    /// The given side quit.
    Abandoned(Color),
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub reason: EndReason,
    pub score: Score,
}

impl Outcome {
    /// Score a game that ended on the board, giving the empties to the leader.
    fn scored(board: &Board, reason: EndReason) -> Self {
        Self {
            reason,
            score: board.count_all_pawns(),
        }
    }

    /// A quitter forfeits the whole board, pieces already placed included.
    fn forfeited(quitter: Color) -> Self {
        let mut score = Score::default();
        match !quitter {
            Color::Black => score.black = NUM_SPACES as u8,
            Color::White => score.white = NUM_SPACES as u8,
        }
        Self {
            reason: EndReason::Abandoned(quitter),
            score,
        }
    }

    /// The winning side, or None for a draw.
    pub fn winner(self) -> Option<Color> {
        self.score.leader()
    }
}

/// What a successful [`Game::play`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Placed {
        color: Color,
        position: Position,
        flipped: PositionSet,
    },
    Passed(Color),
    Quit(Color),
}

/// Why an action was refused. The game state is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum IllegalAction {
    #[display(fmt = "the game is already over")]
    GameOver,
    #[display(fmt = "cannot pass while a legal move exists")]
    PassWithMovesAvailable,
    #[display(fmt = "illegal move: {}", _0)]
    Move(IllegalMove),
}

impl From<IllegalMove> for IllegalAction {
    fn from(err: IllegalMove) -> Self {
        IllegalAction::Move(err)
    }
}

/// The complete state of an Othello game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Color,
    just_passed: bool,
    outcome: Option<Outcome>,
}

impl Default for Game {
    /// A fresh game from the starting position, black to move.
    fn default() -> Self {
        Self::new(Board::new(), Color::default())
    }
}

impl Game {
    /// Start a game from an arbitrary position.
    pub fn new(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            just_passed: false,
            outcome: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is.
    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[inline]
    pub fn just_passed(&self) -> bool {
        self.just_passed
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// True when the side to move has no legal placement and must pass.
    pub fn must_pass(&self) -> bool {
        !self.board.can_play(self.to_move)
    }

    /// Legal placements for the side to move.
    pub fn legal_moves(&self) -> PositionSet {
        self.board.legal_moves(self.to_move)
    }

    /// Apply `action` for the side to move.
    pub fn play(&mut self, action: Action) -> Result<Turn, IllegalAction> {
        if self.is_finished() {
            return Err(IllegalAction::GameOver);
        }

        let color = self.to_move;
        let turn = match action {
            Action::Place(position) => {
                let flipped = self.board.place(position, color)?;
                self.just_passed = false;
                if self.board.is_full() {
                    self.finish(Outcome::scored(&self.board, EndReason::BoardFull));
                }
                Turn::Placed {
                    color,
                    position,
                    flipped,
                }
            }
            Action::Pass => {
                if !self.must_pass() {
                    return Err(IllegalAction::PassWithMovesAvailable);
                }
                debug!(%color, "pass");
                if self.just_passed {
                    self.finish(Outcome::scored(&self.board, EndReason::Blocked));
                }
                self.just_passed = true;
                Turn::Passed(color)
            }
            Action::Quit => {
                self.finish(Outcome::forfeited(color));
                Turn::Quit(color)
            }
        };

        self.to_move = !color;
        Ok(turn)
    }

    fn finish(&mut self, outcome: Outcome) {
        debug!(?outcome, "game over");
        self.outcome = Some(outcome);
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        if self.just_passed {
            writeln!(f, "(Last move was a pass)")?;
        }
        match self.outcome {
            Some(outcome) => write!(f, "Game over: {}", outcome.score),
            None => write!(f, "{} to move", self.to_move),
        }
    }
}
