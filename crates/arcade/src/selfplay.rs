//! Bot-versus-bot games

use chess_core::Color;
use tracing::{error, info};

use crate::session::{Difficulty, GameSession, SessionError};
use crate::summary::GameSummary;

/// Configuration for a self-play game
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub light: Difficulty,
    pub dark: Difficulty,
    /// Maximum plies before the game is abandoned
    pub max_plies: u32,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            light: Difficulty::Medium,
            dark: Difficulty::Medium,
            max_plies: 200,
        }
    }
}

/// Plays a fresh game in `session` until it ends or hits the ply limit.
pub fn run_selfplay(session: &mut GameSession, config: &SelfPlayConfig) -> GameSummary {
    session.initialize_game();

    for _ in 0..config.max_plies {
        let turn = session.turn();
        let difficulty = match turn {
            Color::Light => config.light,
            Color::Dark => config.dark,
        };
        match session.request_bot_move(turn, difficulty) {
            Ok(applied) if applied.status.is_terminal() => break,
            Ok(_) => {}
            Err(SessionError::GameOver(_)) => break,
            Err(e) => {
                // Bots only pick moves from the legal list, so this means a bug
                error!(error = %e, "self-play aborted");
                break;
            }
        }
    }

    let summary = GameSummary::from_state(
        session.state(),
        &format!("bot ({})", config.light),
        &format!("bot ({})", config.dark),
    );
    info!(status = %summary.status, plies = summary.plies, "self-play finished");
    summary
}
