//! [`Connector`] for two people sharing one terminal.

use super::connector::{parse_confirmation, parse_coordinate, seat_label, Axis, Connector};
use crate::render::render_board;
use anyhow::bail;
use flank_othello::{Board, Color};
use std::io::{self, BufRead, BufReader, Write};

pub struct TerminalConnector<R, W> {
    input: R,
    output: W,
    line: String,
}

impl TerminalConnector<BufReader<io::Stdin>, io::Stdout> {
    /// A connector over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConnector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, color: Color, question: &str) -> anyhow::Result<&str> {
        writeln!(self.output)?;
        writeln!(self.output, "{} {}", seat_label(color), question)?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            bail!("input closed while waiting for {}", seat_label(color));
        }
        Ok(self.line.as_str())
    }
}

impl<R: BufRead, W: Write> Connector for TerminalConnector<R, W> {
    fn ask_quit(&mut self, color: Color) -> anyhow::Result<bool> {
        let answer = self.prompt(color, "Would you like to quit the game ? (Y/N)")?;
        Ok(parse_confirmation(answer))
    }

    fn ask_coordinate(&mut self, color: Color, axis: Axis) -> anyhow::Result<u8> {
        let question = format!(
            "Please enter the {:?} position to place your pawn [Range : 1 to 8].",
            axis
        );
        let answer = self.prompt(color, &question)?;
        Ok(parse_coordinate(answer))
    }

    fn show_board(&mut self, board: &Board) -> anyhow::Result<()> {
        write!(self.output, "{}", render_board(board))?;
        self.output.flush()?;
        Ok(())
    }

    fn announce(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
