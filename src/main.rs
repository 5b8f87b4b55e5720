//! Twisty Puzzle
//!
//! A 3x3x3 twisty puzzle with an interactive 3D viewer. Turns are queued up
//! with the keyboard and played back in order, or applied headlessly from
//! the command line.

mod visualization;

use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;

use twisty::cube::format_state;
use twisty::{CubeState, MoveQueue, QueuedMove, SliceGroup};

/// Simulates a 3x3x3 twisty puzzle with queued, animated slice turns.
#[derive(Parser)]
#[command(name = "twisty")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive 3D viewer, optionally pre-queueing moves.
    Display {
        /// Moves to queue before the viewer opens, e.g. `right up equator'`.
        moves: Vec<String>,
    },
    /// Apply a move sequence headlessly and print the resulting layout.
    Apply {
        /// Moves in queue order, e.g. `right up right' up'`.
        moves: Vec<String>,
    },
    /// List the legal move tokens.
    Moves,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Display { moves }) => run_display(&moves),
        Some(Command::Apply { moves }) => run_apply(&moves),
        Some(Command::Moves) => run_moves(),
        None => run_display(&[]),
    }
}

/// Parses move tokens, reporting the first bad one.
fn parse_moves(tokens: &[String]) -> Result<Vec<QueuedMove>, String> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse()
                .map_err(|_| format!("unknown move '{token}' (see `twisty moves`)"))
        })
        .collect()
}

/// Opens the interactive viewer with the given moves already queued.
fn run_display(tokens: &[String]) {
    match parse_moves(tokens) {
        Ok(moves) => {
            println!("Controls: F/B/L/R/D/U queue an outer turn, C/E/S a middle turn,");
            println!("          Shift reverses, Return plays the queue, Backspace resets");
            visualization::display(moves);
        }
        Err(message) => eprintln!("{message}"),
    }
}

/// Runs a move sequence without a window and prints the final layout.
fn run_apply(tokens: &[String]) {
    let moves = match parse_moves(tokens) {
        Ok(moves) => moves,
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };

    let mut cube = CubeState::new();
    let mut queue = MoveQueue::new();
    for mv in moves {
        queue.enqueue(mv.group, mv.reversed);
    }
    queue.run(&mut cube);

    print!("{}", format_state(&cube));
    if cube.is_solved() {
        println!("solved");
    }
}

/// Prints the 18 legal move tokens.
fn run_moves() {
    for group in SliceGroup::iter() {
        let name = group.to_string();
        println!("{name:<13} {name}'");
    }
}
