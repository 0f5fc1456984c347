use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sanboard::{Board, Colour, Game, move_tokens};

/// Replay a list of algebraic notation moves and print the resulting FEN
#[derive(Parser, Debug)]
#[command(name = "sanboard", version, about, long_about = None)]
struct Cli {
    /// File holding the movetext, e.g. `1. e4 e5 2. Nf3`. Reads stdin when omitted
    path: Option<PathBuf>,

    /// Print the FEN after every move instead of only the last one
    #[arg(long)]
    each: bool,

    /// Print the final position as a board diagram
    #[arg(long)]
    board: bool,

    /// Print the FEN of a board snapshot given as a FEN piece placement field instead of
    /// replaying moves
    #[arg(long, value_name = "FIELD", conflicts_with_all = ["path", "each", "board"])]
    placement: Option<String>,

    /// Make Black the side to move in the `--placement` FEN
    #[arg(long, requires = "placement")]
    black: bool,

    /// Log rejected moves and applied moves
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(field) = cli.placement.as_deref() {
        return print_placement(field, cli.black);
    }

    let movetext = read_movetext(cli.path.as_ref())?;
    let tokens = move_tokens(&movetext);
    info!(tokens = tokens.len(), "replaying movetext");

    let mut game = Game::new();
    if cli.each {
        println!("{}", game.to_fen());
    }

    for (i, token) in tokens.iter().enumerate() {
        game.try_apply_move(token)
            .with_context(|| format!("Move {} `{}` rejected", i + 1, token))?;
        if cli.each {
            println!("{}", game.to_fen());
        }
    }

    if cli.board {
        print!("{}", game);
    } else if !cli.each {
        println!("{}", game.to_fen());
    }

    Ok(())
}

fn print_placement(field: &str, black: bool) -> Result<()> {
    let board = Board::from_placement(field)
        .with_context(|| format!("Invalid piece placement `{}`", field))?;
    let active = if black { Colour::Black } else { Colour::White };
    info!(active = ?active, "writing placement snapshot");

    println!("{}", board.to_fen(active));
    Ok(())
}

fn read_movetext(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read movetext from {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read movetext from stdin")?;
            Ok(buf)
        }
    }
}
