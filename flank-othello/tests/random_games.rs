use flank_othello::{Action, Color, EndReason, Game, Turn, NUM_SPACES};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

/// Play random legal moves until the game ends, checking piece counts after every turn.
fn play_random_game(seed: u64) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::default();

    while !game.is_finished() {
        let before = game.board().count_pawns();
        let color = game.to_move();

        let action = match game.legal_moves().choose(&mut rng) {
            Some(mv) => Action::Place(mv),
            None => Action::Pass,
        };

        match game.play(action).expect("random legal action was refused") {
            Turn::Placed { flipped, .. } => {
                let after = game.board().count_pawns();
                let flipped = flipped.len() as u8;
                assert_eq!(after.total(), before.total() + 1);
                assert_eq!(after.of(color), before.of(color) + 1 + flipped);
                assert_eq!(after.of(!color), before.of(!color) - flipped);
            }
            Turn::Passed(passer) => {
                assert_eq!(passer, color);
                assert_eq!(game.board().count_pawns(), before);
            }
            Turn::Quit(_) => unreachable!("random games never quit"),
        }
    }

    game
}

#[test]
fn random_games_terminate_with_consistent_scores() {
    for seed in 0..50 {
        let game = play_random_game(seed);
        let outcome = game.outcome().unwrap();
        let board = game.board();

        assert!(!board.can_play(Color::Black));
        assert!(!board.can_play(Color::White));

        match outcome.reason {
            EndReason::BoardFull => assert!(board.is_full()),
            EndReason::Blocked => {}
            EndReason::Abandoned(_) => panic!("nobody quit"),
        }

        let pieces = board.count_pawns();
        if pieces.black == pieces.white {
            assert_eq!(outcome.score, pieces);
            assert_eq!(outcome.winner(), None);
        } else {
            assert_eq!(outcome.score.total() as usize, NUM_SPACES);
        }
    }
}

#[test]
fn random_games_are_reproducible() {
    assert_eq!(play_random_game(7), play_random_game(7));
}
