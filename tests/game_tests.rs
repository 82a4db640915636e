//! Game record tests: committing turns one after another.

use draughts_engine::board::{BoardBuilder, Color, Move, Square, StateError};
use draughts_engine::zobrist::position_key;
use draughts_engine::Game;

#[test]
fn self_play_alternates_sides() {
    let mut game = Game::from_start();
    for ply in 0..6 {
        let expected = if ply % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(game.current().turn(), expected);
        game.play(2).unwrap();
    }
    assert_eq!(game.plies(), 6);
    assert_eq!(game.moves().len(), 6);
    assert_eq!(game.history().len(), 7);
}

#[test]
fn history_records_position_keys() {
    let mut game = Game::from_start();
    game.play(1).unwrap();
    let current = game.current();
    assert_eq!(
        game.history().last().copied(),
        Some(position_key(current.board(), current.turn()))
    );
    assert_eq!(game.repetitions(), 1);
}

#[test]
fn finished_game_refuses_to_play() {
    // White wins by taking the last black man.
    let start = BoardBuilder::new()
        .man(Square::at(5, 2), Color::White)
        .man(Square::at(4, 3), Color::Black)
        .build_state();
    let mut game = Game::new(start);
    game.play(3).unwrap();
    assert!(game.is_over());
    assert_eq!(game.current().turn(), Color::Black);
    assert_eq!(game.play(3).err(), Some(StateError::Terminal));

    let any = Move::simple(Square::at(3, 4), Square::at(2, 3));
    assert_eq!(game.commit(&any).err(), Some(StateError::Terminal));
}

#[test]
fn committed_move_matches_board() {
    let mut game = Game::from_start();
    let mv = Move::simple(Square::at(5, 2), Square::at(4, 3));
    let state = game.commit(&mv).unwrap();
    assert!(state.board().is_empty(Square::at(5, 2)));
    assert!(!state.board().is_empty(Square::at(4, 3)));
    assert_eq!(state.last_move(), Some(&mv));
}
