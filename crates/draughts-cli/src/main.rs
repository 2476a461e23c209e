//! Play English draughts at the terminal.

use anyhow::Context;
use clap::Parser;
use draughts_cli::{Console, DraughtsConfig, HumanPlayer, Renderer};
use draughts_core::Color;
use draughts_engine::{Board, Game};
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "draughts")]
#[command(about = "Two-player English draughts at the terminal")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value_os_t = DraughtsConfig::default_path())]
    config: PathBuf,

    /// Starting position as a board diagram (rows separated by '/')
    #[arg(long)]
    position: Option<String>,

    /// Side that moves first (black or red)
    #[arg(long)]
    first: Option<Color>,

    /// Draw the board without terminal colors
    #[arg(long)]
    no_color: bool,

    /// Do not clear the screen between turns
    #[arg(long)]
    no_clear: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut config = DraughtsConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(first) = args.first {
        config.first_to_move = first;
    }
    if args.position.is_some() {
        config.position = args.position;
    }
    config.color &= !args.no_color;
    config.clear_screen &= !args.no_clear;
    tracing::debug!(?config, "configuration loaded");

    let board = match &config.position {
        Some(diagram) => Board::from_diagram(diagram)
            .with_context(|| format!("invalid starting position '{}'", diagram))?,
        None => Board::new(),
    };
    let mut game = Game::from_board(board, config.first_to_move);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = RefCell::new(Console::new(
        stdin.lock(),
        stdout.lock(),
        Renderer::new(config.color),
        config.clear_screen,
    ));
    let mut black = HumanPlayer::new(&console);
    let mut red = HumanPlayer::new(&console);

    let winner = game.play(&mut black, &mut red)?;
    tracing::info!(moves = game.move_history().len(), "game finished");

    let mut console = console.borrow_mut();
    console.show(game.board(), None)?;
    match winner {
        Some(color) => console.say(&format!("Winner: {}", color))?,
        None => console.say("No pieces remain.")?,
    }
    Ok(())
}
