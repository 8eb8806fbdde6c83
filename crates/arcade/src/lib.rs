//! Arcade chess: a game session with a bot opponent
//!
//! This crate wires the rules in `chess_core` to the two bot tiers:
//! - `GameSession`: the interface a front end drives (legal moves, apply, bot move)
//! - Difficulty tiers: random (easy) and alpha-beta search (medium)
//! - TOML configuration, text rendering and game summaries
//!
//! # Usage
//!
//! ```bash
//! # Play Light against the medium bot
//! cargo run -p chess_arcade -- play --difficulty medium
//!
//! # Two humans at one terminal
//! cargo run -p chess_arcade -- play --mode pvp
//!
//! # Watch the bots play each other and dump the result as JSON
//! cargo run -p chess_arcade -- --json selfplay --light easy --dark medium
//! ```

mod config;
mod render;
mod selfplay;
mod session;
mod summary;

pub use config::*;
pub use render::*;
pub use selfplay::*;
pub use session::*;
pub use summary::*;
