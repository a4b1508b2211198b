//! A single square of the board.

use crate::piece::{Color, Piece};

/// One board square: either empty or holding exactly one [`Piece`].
///
/// Cells are only ever mutated through [`Board`](crate::Board), which checks
/// emptiness before placing and occupation before flipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(Piece),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Clear the square, dropping any piece on it.
    #[inline]
    pub fn set_empty(&mut self) {
        *self = Cell::Empty;
    }

    /// Put `piece` on the square.
    /// Callers check [`Cell::is_empty`] first; an occupied square is overwritten.
    #[inline]
    pub fn occupy(&mut self, piece: Piece) {
        debug_assert!(self.is_empty(), "occupying a non-empty cell");
        *self = Cell::Occupied(piece);
    }

    /// The color of the piece on this square, or `None` if it is empty.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece.color()),
        }
    }

    /// Flip the piece on this square. Returns false (and does nothing) if empty.
    #[inline]
    pub fn flip_piece(&mut self) -> bool {
        match self {
            Cell::Empty => false,
            Cell::Occupied(piece) => {
                piece.flip();
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_empty() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.color(), None);
    }

    #[test]
    fn occupy_then_clear() {
        let mut cell = Cell::Empty;
        cell.occupy(Piece::new(Color::Black));
        assert!(!cell.is_empty());
        assert_eq!(cell.color(), Some(Color::Black));

        cell.set_empty();
        assert!(cell.is_empty());
    }

    #[test]
    fn flip_occupied() {
        let mut cell = Cell::Occupied(Piece::new(Color::White));
        assert!(cell.flip_piece());
        assert_eq!(cell.color(), Some(Color::Black));
    }

    #[test]
    fn flip_empty_is_noop() {
        let mut cell = Cell::Empty;
        assert!(!cell.flip_piece());
        assert_eq!(cell, Cell::Empty);
    }
}
