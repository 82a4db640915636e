//! Game record: commits searched moves and remembers the positions seen.

use crate::board::{search_with_config, Move, SearchConfig, State, StateError};

/// A game in progress.
///
/// Each call to [`Game::play`] searches the current position, commits the
/// chosen child as the new root and records its key.
#[derive(Debug, Clone)]
pub struct Game {
    current: State,
    history: Vec<u64>,
    moves: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Game::from_start()
    }
}

impl Game {
    /// Start a game from `state`, which becomes a root at level 0
    #[must_use]
    pub fn new(mut state: State) -> Self {
        state.reset_level();
        let history = vec![state.key()];
        Game {
            current: state,
            history,
            moves: Vec::new(),
        }
    }

    /// Start a game from the standard starting position
    #[must_use]
    pub fn from_start() -> Self {
        Game::new(State::start())
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> &State {
        &self.current
    }

    /// True once the side to move has no legal continuation
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.current.is_terminal()
    }

    /// Number of committed turns
    #[inline]
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// Committed turns, oldest first
    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Keys of every position reached, including the starting one
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[u64] {
        &self.history
    }

    /// How many times the current position has occurred
    #[must_use]
    pub fn repetitions(&self) -> usize {
        let key = self.current.key();
        self.history.iter().filter(|&&k| k == key).count()
    }

    /// Search `depth` plies and commit the chosen move.
    ///
    /// Fails with [`StateError::Terminal`] once the game is over and with
    /// [`StateError::NotSearched`] if `depth` is too shallow to choose a move.
    pub fn play(&mut self, depth: i32) -> Result<&State, StateError> {
        self.play_with_config(&SearchConfig::with_depth(depth))
    }

    /// Search according to `config` and commit the chosen move.
    pub fn play_with_config(&mut self, config: &SearchConfig) -> Result<&State, StateError> {
        search_with_config(&mut self.current, config)?;
        let mut next = self.current.take_next_move()?;
        next.reset_level();

        if let Some(mv) = next.last_move() {
            engine_log!(info, "ply {}: {} plays {}", self.moves.len() + 1, self.current.turn(), mv);
            self.moves.push(mv.clone());
        }
        self.history.push(next.key());
        self.current = next;
        Ok(&self.current)
    }

    /// Commit an externally chosen successor of the current position.
    ///
    /// `mv` must be one of the moves the generator produces for the current
    /// state; anything else fails with [`StateError::UnknownMove`].
    pub fn commit(&mut self, mv: &Move) -> Result<&State, StateError> {
        if self.current.is_terminal() {
            return Err(StateError::Terminal);
        }
        let mut next = self
            .current
            .children()
            .into_iter()
            .find(|child| child.last_move() == Some(mv))
            .ok_or(StateError::UnknownMove)?;
        next.reset_level();
        self.moves.push(mv.clone());
        self.history.push(next.key());
        self.current = next;
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Square};

    #[test]
    fn test_play_commits_and_flips_turn() {
        let mut game = Game::from_start();
        let state = game.play(2).unwrap();
        assert_eq!(state.turn(), Color::Black);
        assert_eq!(state.level(), 0);
        assert_eq!(game.plies(), 1);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_parallel_play_matches_sequential_value() {
        let mut sequential = Game::from_start();
        let mut parallel = Game::from_start();
        let a = sequential.play(3).unwrap().balance();
        let b = parallel
            .play_with_config(&SearchConfig::with_depth(3).threads(2))
            .unwrap()
            .balance();
        assert_eq!(a, b);
        assert_eq!(parallel.plies(), 1);
    }

    #[test]
    fn test_commit_rejects_foreign_move() {
        let mut game = Game::from_start();
        let bogus = Move::simple(Square::at(5, 0), Square::at(3, 2));
        assert_eq!(game.commit(&bogus).err(), Some(StateError::UnknownMove));

        let legal = Move::simple(Square::at(5, 0), Square::at(4, 1));
        assert!(game.commit(&legal).is_ok());
        assert_eq!(game.moves(), &[legal]);
    }

    #[test]
    fn test_repetitions_count_returning_kings() {
        let start = crate::board::BoardBuilder::new()
            .king(Square::at(7, 2), Color::White)
            .king(Square::at(0, 5), Color::Black)
            .build_state();
        let mut game = Game::new(start);
        let shuffle = [
            Move::simple(Square::at(7, 2), Square::at(6, 1)),
            Move::simple(Square::at(0, 5), Square::at(1, 4)),
            Move::simple(Square::at(6, 1), Square::at(7, 2)),
            Move::simple(Square::at(1, 4), Square::at(0, 5)),
        ];
        for mv in &shuffle {
            game.commit(mv).unwrap();
        }
        assert_eq!(game.repetitions(), 2);
    }
}
