//! Search tree node.

use once_cell::unsync::OnceCell;

use super::constants::{BLACK_WINS, WHITE_WINS};
use crate::board::{Board, Color, Move, StateError};

/// A position in the search tree.
///
/// Each state owns its board snapshot. Children are produced by applying one
/// full turn to the parent and hold no reference back to it; the search
/// keeps only the best child of every node it expands.
#[derive(Clone, Debug)]
pub struct State {
    board: Board,
    turn: Color,
    level: u32,
    terminal: OnceCell<bool>,
    balance: OnceCell<f64>,
    next_move: Option<Box<State>>,
    last_move: Option<Move>,
}

impl State {
    /// Root state for `board` with `turn` to move
    #[must_use]
    pub fn new(board: Board, turn: Color) -> Self {
        State {
            board,
            turn,
            level: 0,
            terminal: OnceCell::new(),
            balance: OnceCell::new(),
            next_move: None,
            last_move: None,
        }
    }

    /// Standard starting position, White to move
    #[must_use]
    pub fn start() -> Self {
        State::new(Board::new(), Color::White)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Number of plies below the root this state was generated at
    #[inline]
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The turn that produced this state, `None` for a root
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    /// True if the side to move has no piece, or no piece that can move or capture.
    ///
    /// Computed once; [`State::children`] also settles it.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        *self
            .terminal
            .get_or_init(|| !self.board.has_any_move(self.turn))
    }

    /// Search-facing evaluation, computed once.
    ///
    /// The side to move loses a terminal state: `BLACK_WINS` if it is White,
    /// `WHITE_WINS` if it is Black. Otherwise the board's material balance.
    pub fn balance(&self) -> f64 {
        *self.balance.get_or_init(|| {
            if self.is_terminal() {
                match self.turn {
                    Color::White => BLACK_WINS,
                    Color::Black => WHITE_WINS,
                }
            } else {
                self.board.balance()
            }
        })
    }

    /// All states reachable in one turn, turn flipped and level + 1.
    ///
    /// An empty result marks this state terminal.
    #[must_use]
    pub fn children(&self) -> Vec<State> {
        let children: Vec<State> = self
            .board
            .successors(self.turn)
            .into_iter()
            .map(|(board, mv)| State {
                board,
                turn: self.turn.opponent(),
                level: self.level + 1,
                terminal: OnceCell::new(),
                balance: OnceCell::new(),
                next_move: None,
                last_move: Some(mv),
            })
            .collect();
        // Already set if is_terminal ran first; both agree.
        let _ = self.terminal.set(children.is_empty());
        children
    }

    /// The child chosen by the last search pass.
    pub fn next_move(&self) -> Result<&State, StateError> {
        if self.is_terminal() {
            return Err(StateError::Terminal);
        }
        self.next_move.as_deref().ok_or(StateError::NotSearched)
    }

    /// Take the chosen child out of this state, e.g. to commit it as the new root.
    pub fn take_next_move(&mut self) -> Result<State, StateError> {
        if self.is_terminal() {
            return Err(StateError::Terminal);
        }
        self.next_move
            .take()
            .map(|child| *child)
            .ok_or(StateError::NotSearched)
    }

    #[inline]
    pub(crate) fn set_next_move(&mut self, child: State) {
        self.next_move = Some(Box::new(child));
    }

    #[inline]
    pub(crate) fn clear_next_move(&mut self) {
        self.next_move = None;
    }

    /// Moves along the chain of chosen children, starting below this state.
    #[must_use]
    pub fn principal_line(&self) -> Vec<Move> {
        let mut line = Vec::new();
        let mut node = self.next_move.as_deref();
        while let Some(child) = node {
            if let Some(mv) = &child.last_move {
                line.push(mv.clone());
            }
            node = child.next_move.as_deref();
        }
        line
    }

    /// Make this state a root: level 0 and no remembered search result.
    pub fn reset_level(&mut self) {
        self.level = 0;
        self.next_move = None;
    }

    /// Zobrist key of the board and side to move
    #[must_use]
    pub fn key(&self) -> u64 {
        self.board.zobrist_key(self.turn)
    }
}
