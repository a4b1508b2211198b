//! Turn orchestration for two players sharing one `flank-othello` board.
//!
//! The rules live in `flank-othello`; this crate only decides who is asked
//! what, and when. All input and output goes through a [`Connector`], so the
//! loop runs the same against a terminal or a script.

pub mod connectors;
pub mod play;
pub mod render;

pub use connectors::Connector;
pub use play::{play_from, play_game, report};

/// Settings for one game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Ask the side to move whether it wants to quit before every move.
    pub prompt_quit: bool,
    /// After an illegal move, list the legal ones.
    pub hints: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt_quit: true,
            hints: false,
        }
    }
}
