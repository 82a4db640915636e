//! Search tests.

use crate::board::{
    alpha_beta, find_best_move, minimax, search, search_with_config, Board, BoardBuilder, Color,
    Piece, SearchConfig, Square, State, StateError, BLACK_WINS, MAX_BOUND, MIN_BOUND, WHITE_WINS,
};

#[test]
fn test_depth_zero_returns_balance() {
    let board = BoardBuilder::new()
        .king(Square::at(4, 3), Color::White)
        .man(Square::at(2, 1), Color::Black)
        .man(Square::at(2, 5), Color::Black)
        .build();
    let mut state = State::new(board, Color::White);
    let value = alpha_beta(&mut state, 0, MIN_BOUND, MAX_BOUND);
    assert!((value - (1.6 - 2.0)).abs() < 1e-9);
    assert!(state.next_move().is_err());
}

#[test]
fn test_terminal_scores_follow_side_to_move() {
    let only_white = BoardBuilder::new().man(Square::at(5, 0), Color::White).build();
    let black_to_move = State::new(only_white, Color::Black);
    assert!(black_to_move.is_terminal());
    assert_eq!(black_to_move.balance(), WHITE_WINS);

    let only_black = only_white.with_colors_swapped();
    let white_to_move = State::new(only_black, Color::White);
    assert_eq!(white_to_move.balance(), BLACK_WINS);

    let mut searched = State::new(only_black, Color::White);
    assert_eq!(alpha_beta(&mut searched, 5, MIN_BOUND, MAX_BOUND), BLACK_WINS);
    assert_eq!(search(&mut searched, 5).err(), Some(StateError::Terminal));
}

#[test]
fn test_search_prefers_win_over_material() {
    // Sliding the king to (7, 6) leaves the black man without a move;
    // crowning the other man only wins material.
    let mut state = BoardBuilder::new()
        .king(Square::at(4, 3), Color::White)
        .man(Square::at(1, 2), Color::White)
        .man(Square::at(6, 7), Color::Black)
        .build_state();
    let value = alpha_beta(&mut state, 2, MIN_BOUND, MAX_BOUND);
    assert_eq!(value, WHITE_WINS);

    let chosen = state.next_move().unwrap();
    assert_eq!(chosen.board().get(Square::at(7, 6)), Some(Piece::king(Color::White)));
    assert!(chosen.is_terminal());
}

#[test]
fn test_capture_into_win_beats_material() {
    // The man on (5, 6) takes both black men in one chain and ends the game;
    // the man on (3, 2) only takes one and leaves a recapture.
    let mut state = BoardBuilder::new()
        .man(Square::at(3, 2), Color::White)
        .man(Square::at(5, 6), Color::White)
        .man(Square::at(2, 3), Color::Black)
        .man(Square::at(4, 5), Color::Black)
        .build_state();
    assert_eq!(state.children().len(), 2);

    let value = alpha_beta(&mut state, 2, MIN_BOUND, MAX_BOUND);
    assert_eq!(value, WHITE_WINS);

    let chosen = state.next_move().unwrap();
    let mv = chosen.last_move().unwrap();
    assert_eq!(mv.from(), Square::at(5, 6));
    assert_eq!(mv.captured().len(), 2);
    assert_eq!(chosen.board().count(Color::Black), 0);
}

#[test]
fn test_black_minimises() {
    // Mirror of the previous position with Black to move.
    let board = BoardBuilder::new()
        .king(Square::at(4, 3), Color::White)
        .man(Square::at(1, 2), Color::White)
        .man(Square::at(6, 7), Color::Black)
        .build()
        .mirrored();
    let mut state = State::new(board, Color::Black);
    let value = alpha_beta(&mut state, 2, MIN_BOUND, MAX_BOUND);
    assert_eq!(value, BLACK_WINS);

    let chosen = state.next_move().unwrap();
    assert_eq!(chosen.board().get(Square::at(0, 1)), Some(Piece::king(Color::Black)));
}

#[test]
fn test_takes_free_piece() {
    let mut state = BoardBuilder::new()
        .man(Square::at(5, 2), Color::White)
        .man(Square::at(4, 3), Color::Black)
        .man(Square::at(0, 1), Color::Black)
        .build_state();
    let mv = find_best_move(&mut state, 1).unwrap();
    assert_eq!(mv.captured(), &[Square::at(4, 3)]);
}

#[test]
fn test_alpha_beta_matches_minimax() {
    for seed in 0..12 {
        let (board, turn) = super::random_playout(seed, 16);
        for depth in 1..=3 {
            let mut state = State::new(board, turn);
            let pruned = alpha_beta(&mut state, depth, MIN_BOUND, MAX_BOUND);
            let full = minimax(&State::new(board, turn), depth);
            assert_eq!(pruned, full, "seed {seed}, depth {depth}");
        }
    }
}

#[test]
fn test_principal_line_starts_with_best_move() {
    let mut state = State::start();
    let result = search(&mut state, 4).unwrap();
    let best = result.best_move.clone().unwrap();
    assert_eq!(result.principal_line.first(), Some(&best));
    assert!(result.principal_line.len() <= 4);
    assert!(result.stats.nodes > 1);

    let chosen = state.next_move().unwrap();
    assert_eq!(chosen.level(), 1);
    assert_eq!(chosen.turn(), Color::Black);
    assert_eq!(chosen.last_move(), Some(&best));
}

#[test]
fn test_search_does_not_change_root_board() {
    let mut state = State::start();
    search(&mut state, 3).unwrap();
    assert_eq!(*state.board(), Board::new());
    assert_eq!(state.turn(), Color::White);
}

#[test]
fn test_search_clears_stale_choice() {
    let mut state = State::start();
    search(&mut state, 2).unwrap();
    assert!(state.next_move().is_ok());
    let result = search(&mut state, 0).unwrap();
    assert!(result.best_move.is_none());
    assert_eq!(state.next_move().err(), Some(StateError::NotSearched));
    assert_eq!(
        find_best_move(&mut state, 0).err(),
        Some(StateError::NotSearched)
    );
}

#[test]
fn test_config_depth_setter() {
    let config = SearchConfig::default().depth(2).threads(1);
    assert_eq!(config.depth, 2);

    let mut configured = State::start();
    let result = search_with_config(&mut configured, &config).unwrap();
    let mut direct = State::start();
    let expected = search(&mut direct, 2).unwrap();
    assert_eq!(result.score, expected.score);
    assert_eq!(result.stats, expected.stats);
    assert_eq!(result.principal_line, expected.principal_line);
}

#[test]
fn test_internal_nodes_are_counted_once() {
    // Root plus its seven children.
    let mut state = State::start();
    let result = search(&mut state, 1).unwrap();
    assert_eq!(result.stats.nodes, 8);
    assert_eq!(result.stats.cutoffs, 0);
}
