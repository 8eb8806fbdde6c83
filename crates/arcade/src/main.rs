//! Arcade chess CLI
//!
//! Play against the bot in the terminal, or watch two bots play.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_arcade::{
    render_board, run_selfplay, ArcadeConfig, Bots, Difficulty, GameMode, GameSession,
    GameSummary, SelfPlayConfig, Side,
};
use chess_core::{Color, Square};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess_arcade", version, about = "Chess against a minimax bot")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the final game summary as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the bot (or another human), entering moves like `e2e4`
    Play {
        /// `bot` plays against the engine, `pvp` is two humans
        #[arg(long, value_enum)]
        mode: Option<GameMode>,
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,
        /// Side the human plays against the bot
        #[arg(long, value_enum)]
        human_color: Option<Side>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Let two bots play each other
    Selfplay {
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        light: Difficulty,
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        dark: Difficulty,
        #[arg(long)]
        max_plies: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ArcadeConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ArcadeConfig::default(),
    };

    let summary = match cli.command {
        Command::Play {
            mode,
            difficulty,
            human_color,
            seed,
        } => {
            if let Some(m) = mode {
                config.game.mode = m;
            }
            if let Some(d) = difficulty {
                config.bot.difficulty = d;
            }
            if let Some(c) = human_color {
                config.game.human_color = c;
            }
            if seed.is_some() {
                config.bot.seed = seed;
            }
            play_interactive(&config)?
        }
        Command::Selfplay {
            light,
            dark,
            max_plies,
            seed,
        } => {
            if seed.is_some() {
                config.bot.seed = seed;
            }
            let selfplay = SelfPlayConfig {
                light,
                dark,
                max_plies: max_plies.unwrap_or(config.game.max_plies),
            };
            let mut session = GameSession::new(Bots::from_config(&config.bot));
            run_selfplay(&mut session, &selfplay)
        }
    };

    if cli.json {
        println!("{}", summary.to_json().context("serializing game summary")?);
    } else {
        println!("{}", summary.generate_report());
    }
    Ok(())
}

fn play_interactive(config: &ArcadeConfig) -> Result<GameSummary> {
    let bot_color = config.bot_side();
    let difficulty = config.bot.difficulty;
    let mut session = GameSession::new(Bots::from_config(&config.bot));
    session.initialize_game();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let state = session.state();
        println!("{}", render_board(&state.board, state.last_move, &[]));

        let status = session.status();
        if status.is_terminal() {
            println!("{status}");
            break;
        }

        if let Some(bot) = bot_color.filter(|&c| c == session.turn()) {
            let applied = session.request_bot_move(bot, difficulty)?;
            println!("Bot plays {}", applied.notation);
            continue;
        }

        print!("{} to move ({status}) > ", session.turn());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match input {
            "quit" | "exit" => break,
            "" => continue,
            _ => {}
        }

        // A lone square lists that piece's destinations
        if let Some(from) = Square::from_coord(input) {
            let targets: Vec<Square> = session.legal_moves_for(from).iter().map(|m| m.to).collect();
            println!("{}", render_board(session.board(), None, &targets));
            continue;
        }

        let Some((from, to)) = parse_coord_move(input) else {
            println!("Enter a move like e2e4, a square like e2, or quit");
            continue;
        };
        let own_piece = session
            .board()
            .piece_at(from)
            .is_some_and(|pc| pc.color == session.turn());
        let legal = own_piece && session.legal_moves_for(from).iter().any(|m| m.to == to);
        if !legal {
            println!("Illegal move: {input}");
            continue;
        }

        let applied = session.apply_move(from, to)?;
        println!("You play {}", applied.notation);
    }

    let (light, dark) = match bot_color {
        Some(Color::Light) => (format!("bot ({difficulty})"), "player".to_string()),
        Some(Color::Dark) => ("player".to_string(), format!("bot ({difficulty})")),
        None => ("player 1".to_string(), "player 2".to_string()),
    };
    Ok(GameSummary::from_state(session.state(), &light, &dark))
}

fn parse_coord_move(txt: &str) -> Option<(Square, Square)> {
    let txt = txt.replace('-', "");
    if txt.len() != 4 || !txt.is_ascii() {
        return None;
    }
    Some((Square::from_coord(&txt[0..2])?, Square::from_coord(&txt[2..4])?))
}
