use flank_othello::{Board, Color};

/// Which coordinate a prompt is asking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// The game's interface to "the outside world": where answers come from and
/// where the board and messages go.
///
/// Errors are reserved for the connector itself failing (closed input, broken
/// output). Unusable answers are not errors.
pub trait Connector {
    /// Ask the side to move whether it wants to leave the game.
    fn ask_quit(&mut self, color: Color) -> anyhow::Result<bool>;

    /// Ask the side to move for one 1-based coordinate.
    /// Returns 0 when the answer is not a number.
    fn ask_coordinate(&mut self, color: Color, axis: Axis) -> anyhow::Result<u8>;

    /// Present the current board.
    fn show_board(&mut self, board: &Board) -> anyhow::Result<()>;

    /// Tell the players something.
    fn announce(&mut self, message: &str) -> anyhow::Result<()>;
}

/// Read a coordinate answer: a non-empty string of digits, or 0 ("no move").
pub fn parse_coordinate(answer: &str) -> u8 {
    let answer = answer.trim_end_matches(&['\r', '\n'][..]);
    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }
    // Too large for a u8 is off the board anyway.
    answer.parse().unwrap_or(0)
}

/// Read a yes/no answer: anything containing a `y` means yes.
pub fn parse_confirmation(answer: &str) -> bool {
    answer.to_ascii_uppercase().contains('Y')
}

/// The label players see for `color`.
pub fn seat_label(color: Color) -> String {
    format!("[Player {}]", color.seat())
}
