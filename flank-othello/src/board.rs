//! The 8x8 Othello board and the capture rules.
//!
//! Cells are stored column-major (`cells[x][y]`), matching the (x, y) order of
//! the public coordinates. Every rule is built on a single directional scan,
//! [`Board::bracketed`], which is pure: moves are validated completely before
//! any cell is touched, so a rejected placement never leaves a trace.

use crate::cell::Cell;
use crate::location::{Direction, Position};
use crate::piece::{Color, Piece};
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use std::fmt;
use tracing::trace;

/// The complete board: 64 cells, each empty or holding one piece.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

/// A set of squares, stored as a row-major bitmask.
/// Used both for the legal moves of a side and for the pieces a move flips.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct PositionSet(u64);

/// Piece counts for both sides.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Into)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

/// Why a placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    #[display(fmt = "the square is already occupied")]
    Occupied,
    #[display(fmt = "the move does not flank any opposing piece")]
    NoCapture,
}

#[derive(Debug, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    #[display(fmt = "unexpected square character {:?}", _0)]
    BadSquare(#[error(not(source))] char),
}

impl Default for Board {
    /// Gets the canonical starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board in the canonical starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset_board();
        board
    }

    /// A board with no pieces at all. Useful for setting up positions.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// Clear every square and lay out the four starting pieces:
    /// White on D4 and E5, Black on E4 and D5.
    pub fn reset_board(&mut self) {
        for column in self.cells.iter_mut() {
            for cell in column.iter_mut() {
                cell.set_empty();
            }
        }

        let lo = EDGE_LENGTH / 2 - 1;
        let hi = EDGE_LENGTH / 2;
        self.cells[lo][lo].occupy(Piece::new(Color::White));
        self.cells[hi][hi].occupy(Piece::new(Color::White));
        self.cells[hi][lo].occupy(Piece::new(Color::Black));
        self.cells[lo][hi].occupy(Piece::new(Color::Black));
    }

    #[inline]
    pub fn cell(&self, pos: Position) -> Cell {
        let (x, y) = pos.to_coords();
        self.cells[x as usize][y as usize]
    }

    #[inline]
    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        let (x, y) = pos.to_coords();
        &mut self.cells[x as usize][y as usize]
    }

    /// The color on `pos`, or None if the square is empty.
    #[inline]
    pub fn color_at(&self, pos: Position) -> Option<Color> {
        self.cell(pos).color()
    }

    /// Place a piece of `color` at the 1-based coordinates (`x`, `y`).
    ///
    /// Returns false, leaving the board untouched, if the coordinates are off
    /// the board (0 included), the square is taken, or the move captures nothing.
    pub fn place_pawn(&mut self, x: u8, y: u8, color: Color) -> bool {
        match Position::from_one_based(x, y) {
            Some(pos) => self.place(pos, color).is_ok(),
            None => false,
        }
    }

    /// Place a piece of `color` on `pos`, flipping every flanked opponent piece.
    /// Returns the flipped squares.
    pub fn place(&mut self, pos: Position, color: Color) -> Result<PositionSet, IllegalMove> {
        if !self.cell(pos).is_empty() {
            return Err(IllegalMove::Occupied);
        }

        let flips = self.flanks(pos, color);
        if flips.is_none() {
            return Err(IllegalMove::NoCapture);
        }

        for flipped in flips {
            self.cell_mut(flipped).flip_piece();
        }
        self.cell_mut(pos).occupy(Piece::new(color));

        trace!(%pos, %color, flipped = flips.len(), "placed piece");
        Ok(flips)
    }

    /// Every opponent piece that a piece of `color` on `pos` would flip.
    /// Empty if `pos` is occupied or the move is illegal.
    pub fn flanks(&self, pos: Position, color: Color) -> PositionSet {
        let mut flips = PositionSet::default();
        if !self.cell(pos).is_empty() {
            return flips;
        }

        for &direction in Direction::ALL.iter() {
            let run = self.bracketed(pos, direction, color);
            if run > 0 {
                trace!(%pos, ?direction, run, "direction captures");
            }
            let mut current = pos;
            for _ in 0..run {
                // Already walked by the scan, so the step stays on the board.
                match current.step(direction) {
                    Some(next) => current = next,
                    None => break,
                }
                flips.insert(current);
            }
        }
        flips
    }

    /// Walk outwards from `origin` in `direction`, counting opponent pieces
    /// until a piece of `color` anchors them.
    ///
    /// Returns how many pieces would be captured in this direction: 0 if the
    /// walk hits an empty square or the edge first, or if the anchor is adjacent.
    /// `origin` itself is never inspected.
    pub fn bracketed(&self, origin: Position, direction: Direction, color: Color) -> u8 {
        let mut run = 0;
        let mut current = origin;

        while let Some(next) = current.step(direction) {
            match self.color_at(next) {
                None => return 0,
                Some(found) if found == color => return run,
                Some(_) => run += 1,
            }
            current = next;
        }
        0
    }

    /// Whether a move on `pos` by `color` would capture in at least one direction.
    pub fn is_legal(&self, pos: Position, color: Color) -> bool {
        self.cell(pos).is_empty()
            && Direction::ALL
                .iter()
                .any(|&direction| self.bracketed(pos, direction, color) > 0)
    }

    /// Whether `color` has any legal move anywhere on the board.
    pub fn can_play(&self, color: Color) -> bool {
        Position::all().any(|pos| self.is_legal(pos, color))
    }

    /// All squares where `color` may legally place a piece.
    pub fn legal_moves(&self, color: Color) -> PositionSet {
        Position::all()
            .filter(|&pos| self.is_legal(pos, color))
            .collect()
    }

    /// Count the pieces of each color. Empty squares count for nobody.
    pub fn count_pawns(&self) -> Score {
        let mut score = Score::default();
        self.for_each_cell(|_, color| match color {
            Some(Color::Black) => score.black += 1,
            Some(Color::White) => score.white += 1,
            None => {}
        });
        score
    }

    /// Count the pieces of each color, awarding the empty squares to whichever
    /// side has strictly more pieces. A tie leaves the empties unawarded.
    pub fn count_all_pawns(&self) -> Score {
        let mut score = self.count_pawns();
        let empties = NUM_SPACES as u8 - score.total();
        if score.black > score.white {
            score.black += empties;
        } else if score.white > score.black {
            score.white += empties;
        }
        score
    }

    pub fn count_empty(&self) -> u8 {
        NUM_SPACES as u8 - self.count_pawns().total()
    }

    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Visit every square in row-major order with its content.
    /// This is the hook renderers use; the board itself never does I/O.
    pub fn for_each_cell<F: FnMut(Position, Option<Color>)>(&self, mut visit: F) {
        for pos in Position::all() {
            visit(pos, self.color_at(pos));
        }
    }
}

/// Draws the grid with 1-based axes, `X` for Black and `O` for White.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" ")?;
        for x in 1..=EDGE_LENGTH {
            write!(f, " {}", x)?;
        }
        writeln!(f, "   Axis X")?;

        for y in 0..EDGE_LENGTH as u8 {
            write!(f, "{}|", y + 1)?;
            for x in 0..EDGE_LENGTH as u8 {
                let square = Position::from_coords(x, y)
                    .and_then(|pos| self.color_at(pos))
                    .map_or(' ', Color::symbol);
                write!(f, "{}|", square)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Axis Y")
    }
}

/// Build a board from 64 row-major squares: `X`/`B`/`#` for black,
/// `O`/`W` for white, `.`/`-` for empty. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if squares.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength(squares.len()));
        }

        let mut board = Self::empty();
        for (pos, &square) in Position::all().zip(squares.iter()) {
            match square.to_ascii_uppercase() {
                'X' | 'B' | '#' => board.cell_mut(pos).occupy(Piece::new(Color::Black)),
                'O' | 'W' => board.cell_mut(pos).occupy(Piece::new(Color::White)),
                '.' | '-' => {}
                other => return Err(ParseBoardError::BadSquare(other)),
            }
        }
        Ok(board)
    }
}

impl Score {
    /// The number of pieces credited to `color`.
    pub fn of(self, color: Color) -> u8 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn total(self) -> u8 {
        self.black + self.white
    }

    /// The side with strictly more pieces, if any.
    pub fn leader(self) -> Option<Color> {
        use std::cmp::Ordering;
        match self.black.cmp(&self.white) {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black {} - {} White", self.black, self.white)
    }
}

impl PositionSet {
    /// Returns whether the set holds no squares.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns whether `pos` is in this set.
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        self.0 & (1u64 << pos.to_index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, pos: Position) {
        self.0 |= 1u64 << pos.to_index();
    }
}

impl std::iter::FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::default();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl Iterator for PositionSet {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.is_none() {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 ^= 1u64 << index;
        Position::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for PositionSet {}

impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
