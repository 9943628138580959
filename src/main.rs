use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use arbiter_core::Color;
use arbiter_game::{Game, MoveOutcome, format_move};
use arbiter_uci::{EngineClient, EngineConfig};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play chess in the terminal, optionally against a UCI engine.
#[derive(Debug, Parser)]
#[command(name = "arbiter", version)]
struct Args {
    /// Start from this position instead of the initial one.
    #[arg(long)]
    fen: Option<String>,

    /// Let the engine play this side.
    #[arg(long, value_enum)]
    engine_color: Option<Side>,

    /// Engine executable.
    #[arg(long, default_value = "stockfish")]
    engine: PathBuf,

    /// Engine search depth.
    #[arg(long, default_value_t = 20)]
    depth: u8,

    /// Seconds to wait for the engine's answer before giving up.
    #[arg(long, default_value_t = 60)]
    timeout: u64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut game = match &args.fen {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("invalid --fen {fen:?}"))?,
        None => Game::new(),
    };
    let engine_side = args.engine_color.map(Color::from);
    let engine = EngineClient::new(EngineConfig {
        path: args.engine,
        depth: args.depth,
        timeout: Duration::from_secs(args.timeout),
    });
    info!(?engine_side, engine = ?engine.config(), "arbiter starting");

    println!("Enter moves like e2e4 or e2-e4, e7e8n to promote. Type 'moves' for a list, 'quit' to stop.");
    run(&mut game, engine_side, &engine)?;
    println!("Game Over: {}", game.status());
    Ok(())
}

fn run(game: &mut Game, engine_side: Option<Color>, engine: &EngineClient) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        println!("{}", game.board().pretty());
        if game.is_over() {
            return Ok(());
        }

        let side = game.side_to_move();
        if engine_side == Some(side) {
            engine_turn(game, engine);
            continue;
        }

        print!("{} to move: ", side.name());
        stdout.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            game.abandon();
            return Ok(());
        }

        match line.trim() {
            "" => {}
            "quit" | "exit" => {
                game.abandon();
                return Ok(());
            }
            "moves" => {
                let moves: Vec<String> =
                    game.legal_moves().iter().map(|&mv| format_move(mv)).collect();
                println!("{}", moves.join(" "));
            }
            request => match game.play_notation(request) {
                Ok(outcome) => report(&outcome),
                Err(err) => println!("{err}"),
            },
        }
    }
}

fn engine_turn(game: &mut Game, engine: &EngineClient) {
    let token = match engine.best_move_for(game.board(), game.side_to_move()) {
        Ok(token) => token,
        Err(err) => {
            println!("Engine error: {err}");
            game.record_engine_failure();
            return;
        }
    };
    println!("Engine plays {token}");
    match game.play_notation(&token) {
        Ok(outcome) => report(&outcome),
        Err(err) => {
            println!("Engine move rejected: {err}");
            game.record_engine_failure();
        }
    }
}

fn report(outcome: &MoveOutcome) {
    if outcome.gives_check && !outcome.status.is_over() {
        println!("Check!");
    }
}
