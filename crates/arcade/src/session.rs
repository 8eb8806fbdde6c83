//! Game session: the interface a front end drives
//!
//! A [`GameSession`] owns the live [`GameState`] and the bot engines. The
//! front end asks for legal moves of a square, applies the one the player
//! picked, and asks the bot to move when it is the bot's turn. Engines only
//! ever receive a borrowed board and search on their own copies.

use std::fmt;
use std::str::FromStr;

use chess_core::{
    all_legal_moves, legal_moves, status_after_move, AppliedMove, Board, Color, Engine, GameState,
    GameStatus, Move, Square,
};
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::BotConfig;

/// Bot strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random legal move
    Easy,
    /// Fixed-depth alpha-beta search
    Medium,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("easy"),
            Difficulty::Medium => f.write_str("medium"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("game is over: {0}")]
    GameOver(GameStatus),
    #[error("no piece on {0}")]
    EmptySquare(Square),
}

/// The engines backing each difficulty tier.
#[derive(Debug, Clone)]
pub struct Bots {
    pub random: RandomEngine,
    pub classical: ClassicalEngine,
}

impl Default for Bots {
    fn default() -> Self {
        Self {
            random: RandomEngine::new(),
            classical: ClassicalEngine::new(),
        }
    }
}

impl Bots {
    pub fn from_config(config: &BotConfig) -> Self {
        let random = match config.seed {
            Some(seed) => RandomEngine::seeded(seed),
            None => RandomEngine::new(),
        };
        let classical =
            ClassicalEngine::with_depth(config.search_depth).parallel_root(config.parallel_root);
        Self { random, classical }
    }

    fn new_game(&mut self) {
        self.random.new_game();
        self.classical.new_game();
    }
}

/// Picks the bot's move for `color` at the given tier.
///
/// Easy picks uniformly at random. Medium searches and falls back to a random
/// legal move if the search produced none. Returns `None` only when `color`
/// has no legal move.
pub fn choose_move(
    board: &Board,
    color: Color,
    difficulty: Difficulty,
    bots: &mut Bots,
) -> Option<Move> {
    match difficulty {
        Difficulty::Easy => bots.random.choose_move(board, color).best_move,
        Difficulty::Medium => {
            let result = bots.classical.choose_move(board, color);
            result.best_move.or_else(|| {
                debug!(%color, "search returned no move, falling back to random");
                bots.random.pick(&all_legal_moves(board, color))
            })
        }
    }
}

/// A single game against (or between) bots.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    bots: Bots,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Bots::default())
    }
}

impl GameSession {
    pub fn new(bots: Bots) -> Self {
        Self {
            state: GameState::new(),
            bots,
        }
    }

    /// Starts a session from an arbitrary state (puzzles, tests).
    pub fn from_state(state: GameState, bots: Bots) -> Self {
        Self { state, bots }
    }

    /// Resets to the standard starting position, Light to move.
    pub fn initialize_game(&mut self) {
        self.state = GameState::new();
        self.bots.new_game();
        info!("new game");
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn turn(&self) -> Color {
        self.state.turn
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Legal moves of whatever piece stands on `square`.
    ///
    /// Does not check that the piece belongs to the side to move; that is
    /// the caller's job.
    pub fn legal_moves_for(&self, square: Square) -> Vec<Move> {
        legal_moves(&self.state.board, square)
    }

    /// Plays `from` to `to` on the live board.
    ///
    /// `to` must be one of the destinations from [`legal_moves_for`]; the
    /// destination is matched against that list only to recover the castle
    /// tag, not to validate the move.
    ///
    /// [`legal_moves_for`]: GameSession::legal_moves_for
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<AppliedMove, SessionError> {
        let mv = self
            .legal_moves_for(from)
            .into_iter()
            .find(|m| m.to == to)
            .unwrap_or_else(|| Move::new(from, to));
        self.play(mv)
    }

    /// Computes and plays one bot move for `color`.
    ///
    /// Refuses to move when `color` is mated or stalemated, which is also
    /// the game-over case when `color` is the side to move.
    pub fn request_bot_move(
        &mut self,
        color: Color,
        difficulty: Difficulty,
    ) -> Result<AppliedMove, SessionError> {
        let status = status_after_move(&self.state.board, color);
        if status.is_terminal() {
            return Err(SessionError::GameOver(status));
        }
        if color != self.state.turn {
            warn!(%color, turn = %self.state.turn, "bot move requested out of turn");
        }

        let mv = choose_move(&self.state.board, color, difficulty, &mut self.bots)
            .ok_or(SessionError::GameOver(status))?;
        self.play(mv)
    }

    fn play(&mut self, mv: Move) -> Result<AppliedMove, SessionError> {
        let applied = self
            .state
            .apply(mv)
            .ok_or(SessionError::EmptySquare(mv.from))?;
        info!(
            ply = self.state.plies(),
            notation = %applied.notation,
            status = %applied.status,
            "move applied"
        );
        Ok(applied)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
