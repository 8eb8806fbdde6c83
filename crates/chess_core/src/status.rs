//! Post-move classification of a position.

use std::fmt;

use crate::{attacks::in_check, board::Board, movegen::has_legal_move, types::Color};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Normal => "Normal",
            GameStatus::Check => "Check",
            GameStatus::Checkmate => "Checkmate",
            GameStatus::Stalemate => "Stalemate",
        };
        f.write_str(s)
    }
}

/// Classifies the position for the side about to move.
pub fn status_after_move(board: &Board, side_to_move: Color) -> GameStatus {
    let checked = in_check(board, side_to_move);
    let can_move = has_legal_move(board, side_to_move);
    match (checked, can_move) {
        (true, false) => GameStatus::Checkmate,
        (true, true) => GameStatus::Check,
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::Normal,
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
