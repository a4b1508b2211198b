//! `flank-othello` is the rules engine for Othello (Reversi).
//!
//! This package is layered from the smallest token upwards:
//!
//!  - [`Piece`] and [`Cell`] hold a single token and a single board square.
//!  - [`Board`] owns the 8x8 grid of cells and implements the rules proper:
//!    placement validation, flip propagation along the eight directions,
//!    playability detection and scoring.
//!  - [`Game`] drives a [`Board`] through a whole game: turn order, passes,
//!    abandonment and the final [`Outcome`].
//!
//! Coordinates on the public [`Board::place_pawn`] API are 1-based, matching
//! what a player types; everything else uses 0-based [`Position`]s.

pub mod test_utils;

mod board;
mod cell;
mod game;
mod location;
mod piece;

pub use board::*;
pub use cell::*;
pub use game::*;
pub use location::*;
pub use piece::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
