//! The live game: board, side to move and the move history.

use crate::{
    board::Board,
    notation::move_notation,
    status::{status_after_move, GameStatus},
    types::*,
};

/// What applying one move produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub notation: String,
    pub status: GameStatus,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub history: Vec<String>,
    pub last_move: Option<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, Light to move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Color::Light)
    }

    pub fn from_board(board: Board, turn: Color) -> Self {
        GameState {
            board,
            turn,
            history: Vec::new(),
            last_move: None,
        }
    }

    /// Plays `mv` on the live board and classifies the result for the
    /// side that moves next.
    ///
    /// `mv` must come from the legal move list of the current board; it is
    /// not re-validated. Returns `None` (and changes nothing) only when
    /// `mv.from` is empty.
    pub fn apply(&mut self, mv: Move) -> Option<AppliedMove> {
        let piece = self.board.play(mv)?;
        let notation = move_notation(piece, mv);
        self.history.push(notation.clone());
        self.last_move = Some(mv);
        self.turn = self.turn.other();

        Some(AppliedMove {
            mv,
            notation,
            status: status_after_move(&self.board, self.turn),
        })
    }

    pub fn status(&self) -> GameStatus {
        status_after_move(&self.board, self.turn)
    }

    pub fn plies(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
