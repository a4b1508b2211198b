//! Console rendering of the board.

use flank_othello::Board;

/// Draw the board for the terminal: the board's own grid plus a blank line above.
pub fn render_board(board: &Board) -> String {
    format!("\n{}", board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_starting_position() {
        let expected = "
  1 2 3 4 5 6 7 8   Axis X
1| | | | | | | | |
2| | | | | | | | |
3| | | | | | | | |
4| | | |O|X| | | |
5| | | |X|O| | | |
6| | | | | | | | |
7| | | | | | | | |
8| | | | | | | | |
Axis Y
";
        assert_eq!(render_board(&Board::new()), expected);
        assert_eq!(render_board(&Board::new()).trim_start(), Board::new().to_string());
    }
}
