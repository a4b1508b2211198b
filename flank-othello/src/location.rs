//! Code for working with [`Position`]s and [`Direction`]s on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

/// A square on the board, in 0-based column (x) and row (y) coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Position {
    row: u8,
    col: u8,
}

/// One of the eight compass directions a capture can run along.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The (dx, dy) step of this direction. Rows grow downwards.
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }
}

impl Position {
    const LAST: u8 = EDGE_LENGTH as u8 - 1;

    /// Convert from 0-based column and row coordinates.
    /// Returns None if either coordinate is off the board.
    pub fn from_coords(col: u8, row: u8) -> Option<Self> {
        if col > Self::LAST || row > Self::LAST {
            None
        } else {
            Some(Self { row, col })
        }
    }

    /// Convert from the 1-based coordinates players use.
    /// 0 (no input) and anything past 8 are rejected.
    pub fn from_one_based(x: u8, y: u8) -> Option<Self> {
        if x == 0 || y == 0 {
            return None;
        }
        Self::from_coords(x - 1, y - 1)
    }

    /// Get the 1-based (x, y) coordinates.
    pub fn to_one_based(self) -> (u8, u8) {
        (self.col + 1, self.row + 1)
    }

    /// Get the 0-based (column, row) coordinates.
    #[inline]
    pub fn to_coords(self) -> (u8, u8) {
        (self.col, self.row)
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    /// Convert from a row-major square index.
    pub fn from_index(index: u8) -> Option<Self> {
        if index as usize >= NUM_SPACES {
            return None;
        }
        let edge = EDGE_LENGTH as u8;
        Some(Self {
            row: index / edge,
            col: index % edge,
        })
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.row * EDGE_LENGTH as u8 + self.col
    }

    /// The neighbouring square in `direction`, or None if that would leave the board.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let col = self.col as i8 + dx;
        let row = self.row as i8 + dy;
        if col < 0 || row < 0 {
            return None;
        }
        Self::from_coords(col as u8, row as u8)
    }

    /// All squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_SPACES as u8).map(|index| Position {
            row: index / EDGE_LENGTH as u8,
            col: index % EDGE_LENGTH as u8,
        })
    }
}

/// Convert this [`Position`] into string notation ("D3").
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col as usize).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row as usize).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Position`] from a 1-indexed string notation ("D3").
impl std::str::FromStr for Position {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)? as u8;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as u8;

        if chars.next() != None {
            return Err(ParseLocationError);
        }

        Self::from_one_based(col + 1, row).ok_or(ParseLocationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn position_from_index() {
        assert_eq!(Position::from_index(0), Position::from_coords(0, 0));
        assert_eq!(Position::from_index(63), Position::from_coords(7, 7));
        assert_eq!(Position::from_index(9), Position::from_coords(1, 1));
        assert_eq!(Position::from_index(64), None);
    }

    #[test]
    fn position_to_index() {
        for index in 0..64 {
            assert_eq!(Position::from_index(index).unwrap().to_index(), index);
        }
    }

    #[test]
    fn position_from_coords() {
        assert!(Position::from_coords(7, 7).is_some());
        assert_eq!(Position::from_coords(0, 8), None);
        assert_eq!(Position::from_coords(8, 0), None);
    }

    #[test]
    fn position_from_one_based() {
        assert_eq!(Position::from_one_based(1, 1), Position::from_coords(0, 0));
        assert_eq!(Position::from_one_based(8, 3), Position::from_coords(7, 2));
        assert_eq!(Position::from_one_based(0, 3), None);
        assert_eq!(Position::from_one_based(3, 0), None);
        assert_eq!(Position::from_one_based(9, 1), None);
        assert_eq!(Position::from_one_based(1, 9), None);
        assert_eq!(
            Position::from_one_based(4, 6).unwrap().to_one_based(),
            (4, 6)
        );
    }

    #[test]
    fn step_stops_at_edges() {
        let corner = Position::from_coords(0, 0).unwrap();
        assert_eq!(corner.step(Direction::Up), None);
        assert_eq!(corner.step(Direction::Left), None);
        assert_eq!(corner.step(Direction::UpRight), None);
        assert_eq!(corner.step(Direction::DownLeft), None);
        assert_eq!(corner.step(Direction::DownRight), Position::from_coords(1, 1));

        // A diagonal can cross a column edge while the row is still in range.
        let right_edge = Position::from_coords(7, 3).unwrap();
        assert_eq!(right_edge.step(Direction::UpRight), None);
        assert_eq!(right_edge.step(Direction::DownLeft), Position::from_coords(6, 4));
    }

    #[test]
    fn all_positions_are_row_major() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[1], Position::from_coords(1, 0).unwrap());
        assert_eq!(all[8], Position::from_coords(0, 1).unwrap());
    }

    #[test]
    fn position_from_str_success() {
        assert_eq!(Position::from_str("A1"), Ok(Position::from_coords(0, 0).unwrap()));
        assert_eq!(Position::from_str("h8"), Ok(Position::from_coords(7, 7).unwrap()));
        assert_eq!(Position::from_str("D3"), Ok(Position::from_coords(3, 2).unwrap()));
    }

    #[test]
    fn position_from_str_fail() {
        assert_eq!(Position::from_str(""), Err(ParseLocationError));
        assert_eq!(Position::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Position::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Position::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Position::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Position::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn position_to_str() {
        assert_eq!(Position::from_coords(7, 7).unwrap().to_string(), "H8");
        assert_eq!(Position::from_coords(0, 0).unwrap().to_string(), "A1");
        assert_eq!(Position::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Position::from_str("F6").unwrap().to_string(), "F6");
    }
}
