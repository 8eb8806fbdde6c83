//! Game summaries for reporting

use chess_core::{GameState, GameStatus};
use serde::{Deserialize, Serialize};

/// How a finished (or abandoned) game ended, for printing or JSON output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    /// Light's bot or player description
    pub light: String,
    /// Dark's bot or player description
    pub dark: String,
    /// Move list in display notation
    pub history: Vec<String>,
    /// Final status ("Checkmate", "Stalemate", ...)
    pub status: String,
    /// Winning side, if any
    pub winner: Option<String>,
    pub plies: usize,
}

impl GameSummary {
    pub fn from_state(state: &GameState, light: &str, dark: &str) -> Self {
        let status = state.status();
        let winner = match status {
            GameStatus::Checkmate => Some(state.turn.other().to_string()),
            _ => None,
        };
        Self {
            light: light.to_string(),
            dark: dark.to_string(),
            history: state.history.clone(),
            status: status.to_string(),
            winner,
            plies: state.plies(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} (Light) vs {} (Dark) ===\n\n", self.light, self.dark));

        for (i, pair) in self.history.chunks(2).enumerate() {
            let dark = pair.get(1).map(String::as_str).unwrap_or("");
            report.push_str(&format!("{:>3}. {:<16} {}\n", i + 1, pair[0], dark));
        }

        report.push('\n');
        report.push_str(&format!("Result: {}", self.status));
        if let Some(winner) = &self.winner {
            report.push_str(&format!(" ({winner} wins)"));
        }
        report.push_str(&format!(" after {} plies\n", self.plies));
        report
    }
}

