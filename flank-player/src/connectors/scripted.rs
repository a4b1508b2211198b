//! [`Connector`] that replays canned answers, for tests and demos.

use super::connector::{parse_confirmation, parse_coordinate, Axis, Connector};
use crate::render::render_board;
use anyhow::anyhow;
use flank_othello::{Board, Color};
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct ScriptedConnector {
    answers: VecDeque<String>,
    /// Everything shown or announced, in order.
    pub transcript: Vec<String>,
}

impl ScriptedConnector {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, color: Color) -> anyhow::Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("script ran out of answers for {}", color))
    }
}

impl Connector for ScriptedConnector {
    fn ask_quit(&mut self, color: Color) -> anyhow::Result<bool> {
        Ok(parse_confirmation(&self.next_answer(color)?))
    }

    fn ask_coordinate(&mut self, color: Color, _axis: Axis) -> anyhow::Result<u8> {
        Ok(parse_coordinate(&self.next_answer(color)?))
    }

    fn show_board(&mut self, board: &Board) -> anyhow::Result<()> {
        self.transcript.push(render_board(board));
        Ok(())
    }

    fn announce(&mut self, message: &str) -> anyhow::Result<()> {
        self.transcript.push(message.to_string());
        Ok(())
    }
}
