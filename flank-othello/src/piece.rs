//! The two sides of the game and the tokens they place.

use derive_more::{Display, Error};
use std::fmt;

/// One of the two sides in a game. Black always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the starting side (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Color {
    /// The character used for this side in board grids.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }

    /// Seat number as shown to players: Black is player 1, White is player 2.
    pub fn seat(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid color string")]
pub struct ParseColorError;

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Color::Black),
            "white" | "w" | "o" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

/// A single token on the board. Its color only changes when it is captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
}

impl Piece {
    #[inline]
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    #[inline]
    pub fn color(self) -> Color {
        self.color
    }

    /// Turn the piece over to the other side.
    #[inline]
    pub fn flip(&mut self) {
        self.color = !self.color;
    }
}

impl From<Color> for Piece {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_not() {
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(!Color::White, Color::Black);
    }

    #[test]
    fn color_default_is_black() {
        assert_eq!(Color::default(), Color::Black);
    }

    #[test]
    fn color_from_str() {
        assert_eq!("Black".parse(), Ok(Color::Black));
        assert_eq!("o".parse(), Ok(Color::White));
        assert_eq!("grey".parse::<Color>(), Err(ParseColorError));
    }

    #[test]
    fn piece_flip_toggles() {
        let mut piece = Piece::new(Color::White);
        piece.flip();
        assert_eq!(piece.color(), Color::Black);
        piece.flip();
        assert_eq!(piece.color(), Color::White);
    }
}
