//! Terminal front end for the minimax engine.
//!
//! Plays one game between a human on stdin and the computer player, printing
//! the board each turn and optionally exporting the finished record as JSON.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tictactoe_minimax::{
    Agent, BoardState, DEFAULT_SEARCH_DEPTH, ExternalAgent, Game, GameOutcome, MinimaxAgent,
    Player,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PieceArg {
    X,
    O,
}

impl From<PieceArg> for Player {
    fn from(arg: PieceArg) -> Self {
        match arg {
            PieceArg::X => Player::X,
            PieceArg::O => Player::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe-minimax")]
#[command(version, about = "Play tic-tac-toe against a minimax engine", long_about = None)]
struct Cli {
    /// Piece the human plays (X moves first)
    #[arg(long, value_enum, default_value = "x")]
    piece: PieceArg,

    /// Search depth for the computer player
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u32,

    /// Seed for the computer's random opening move
    #[arg(long)]
    seed: Option<u64>,

    /// Write the finished game record to this path as JSON
    #[arg(long)]
    record: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let human_piece: Player = cli.piece.into();
    let engine_piece = human_piece.opponent();

    let mut engine = MinimaxAgent::with_depth("computer", engine_piece, cli.depth);
    if let Some(seed) = cli.seed {
        engine = engine.with_seed(seed);
    }
    let mut human = ExternalAgent::new("you", human_piece, read_position);

    let mut game = Game::new();
    println!("You are {human_piece}. Positions are 0-8, row by row:\n");
    println!(" 0 1 2\n 3 4 5\n 6 7 8\n");

    while !game.is_over() {
        let board = game.current_state()?;
        println!("{board}\n");

        let mv = if board.to_move == human_piece {
            human.decide_move(&board)?
        } else {
            let mv = engine.decide_move(&board)?;
            println!("{} plays {}", engine.name(), mv.position);
            mv
        };

        game.play(mv.position)?;
    }

    println!("{}\n", game.current_state()?);
    match game.outcome {
        Some(GameOutcome::Win(winner)) if winner == human_piece => println!("You win!"),
        Some(GameOutcome::Win(_)) => println!("The computer wins."),
        _ => println!("Draw."),
    }

    if let Some(path) = cli.record {
        let json = serde_json::to_string_pretty(&game)?;
        std::fs::write(&path, json)
            .with_context(|| format!("writing game record to {}", path.display()))?;
        println!("Game record written to {}", path.display());
    }

    Ok(())
}

/// Prompt on stdout and read a position from stdin, retrying until the
/// square is open.
fn read_position(board: &BoardState) -> tictactoe_minimax::Result<usize> {
    let stdin = std::io::stdin();
    loop {
        print!("Your move (0-8): ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;

        match line.trim().parse::<usize>() {
            Ok(pos) if board.is_valid_square(pos) => return Ok(pos),
            Ok(pos) => println!("Position {pos} is not an open square."),
            Err(_) => println!("Enter a number between 0 and 8."),
        }
    }
}
