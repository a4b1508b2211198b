//! The turn loop: asks the side to move for an action until the game ends.

use crate::connectors::{seat_label, Axis, Connector};
use crate::Config;
use flank_othello::{Action, EndReason, Game, IllegalAction, Outcome, Position, Turn, NUM_SPACES};
use itertools::Itertools;
use tracing::{debug, info};

/// Play a game from the starting position.
pub fn play_game<C: Connector>(connector: &mut C, config: &Config) -> anyhow::Result<Outcome> {
    play_from(Game::default(), connector, config)
}

/// Play `game` to the end.
/// Returns an error only when the connector fails, never for an illegal move.
pub fn play_from<C: Connector>(
    mut game: Game,
    connector: &mut C,
    config: &Config,
) -> anyhow::Result<Outcome> {
    connector.show_board(game.board())?;

    loop {
        if let Some(outcome) = game.outcome() {
            info!(reason = ?outcome.reason, score = %outcome.score, "game finished");
            return Ok(outcome);
        }

        let color = game.to_move();
        if game.must_pass() {
            game.play(Action::Pass)?;
            connector.announce(&format!("{} cannot play and passes.", seat_label(color)))?;
            continue;
        }

        match take_turn(&mut game, connector, config)? {
            Turn::Quit(_) => continue,
            turn => debug!(?turn),
        }
        connector.show_board(game.board())?;
    }
}

/// Keep asking the side to move until it makes a legal move or quits.
fn take_turn<C: Connector>(
    game: &mut Game,
    connector: &mut C,
    config: &Config,
) -> anyhow::Result<Turn> {
    let color = game.to_move();

    loop {
        if config.prompt_quit && connector.ask_quit(color)? {
            return Ok(game.play(Action::Quit)?);
        }

        let x = connector.ask_coordinate(color, Axis::X)?;
        let y = connector.ask_coordinate(color, Axis::Y)?;
        let position = match Position::from_one_based(x, y) {
            Some(position) => position,
            None => {
                connector.announce("Coordinates must be between 1 and 8.")?;
                continue;
            }
        };

        match game.play(Action::Place(position)) {
            Ok(turn) => return Ok(turn),
            Err(IllegalAction::Move(err)) => {
                connector.announce(&format!("Cannot play ({}, {}): {}.", x, y, err))?;
                if config.hints {
                    connector.announce(&format!("Legal moves: {}", format_moves(game)))?;
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// The legal moves of the side to move, as 1-based (x, y) pairs.
fn format_moves(game: &Game) -> String {
    game.legal_moves()
        .map(|pos| {
            let (x, y) = pos.to_one_based();
            format!("({}, {})", x, y)
        })
        .join(" ")
}

/// Describe how a game ended, one line per fact.
pub fn report(outcome: &Outcome) -> String {
    let mut lines = Vec::new();

    match outcome.reason {
        EndReason::Blocked => lines.push("Players are both blocked !".to_string()),
        EndReason::Abandoned(quitter) => {
            lines.push(format!("Player {} has left the game.", quitter.seat()))
        }
        EndReason::BoardFull => {}
    }

    match outcome.winner() {
        Some(winner) => lines.push(format!("Player {} won !", winner.seat())),
        None => lines.push("Draw !".to_string()),
    }

    if let EndReason::Abandoned(quitter) = outcome.reason {
        lines.push(format!(
            "Player {} got all {} pawns due to player {}'s abandonment.",
            (!quitter).seat(),
            NUM_SPACES,
            quitter.seat()
        ));
    } else {
        lines.push(format!("Final score: {}", outcome.score));
    }

    lines.join("\n")
}
