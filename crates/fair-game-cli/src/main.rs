//! Fair Game console
//!
//! Commits to a computer move, prints the HMAC, reads one move from stdin,
//! then prints the result and the key so the HMAC can be checked.
//!
//! Usage: fair-game Rock Paper Scissors

use anyhow::{Context, Result};
use clap::Parser;
use fair_game_core::protocol::{EXIT_CHOICE, HELP_TOKEN};
use fair_game_core::{
    EntropySource, GameSession, MoveSet, RevealMessage, SessionOutcome, SessionState,
};
use rand::rngs::OsRng;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fair-game")]
#[command(about = "Rock-paper-scissors for any odd number of moves, with a verifiable HMAC")]
struct Args {
    /// Move names in cyclic order: an odd number (at least 3) of unique names.
    /// Flags go before the names, which may start with '-'.
    #[arg(allow_hyphen_values = true)]
    moves: Vec<String>,

    /// Also print the revealed result as a JSON line
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let moves = MoveSet::new(args.moves)
        .context("Please provide an odd number of unique moves (at least 3)")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let state = play(moves, &mut OsRng, stdin.lock(), stdout.lock(), args.json)?;
    info!(state = %state, "session finished");
    Ok(())
}

/// Run one session against `input` and `out`
fn play<E, R, W>(
    moves: MoveSet,
    rng: &mut E,
    mut input: R,
    mut out: W,
    json: bool,
) -> Result<SessionState>
where
    E: EntropySource,
    R: BufRead,
    W: Write,
{
    let mut session = GameSession::new(moves, rng);

    let commit = session.commit(rng)?;
    writeln!(out, "HMAC: {}", commit.mac)?;

    let menu = session.await_input()?;
    writeln!(out, "Available moves:")?;
    for entry in &menu {
        writeln!(out, "{}", entry)?;
    }
    writeln!(out, "{} - exit", EXIT_CHOICE)?;
    writeln!(out, "{} - help", HELP_TOKEN)?;
    write!(out, "Enter your move: ")?;
    out.flush()?;

    // EOF leaves the token empty, which the session rejects as invalid
    let mut token = String::new();
    input
        .read_line(&mut token)
        .context("Failed to read move from stdin")?;

    match session.submit(&token)? {
        SessionOutcome::Resolved(reveal) => {
            print_reveal(&mut out, &reveal)?;
            if json {
                writeln!(out, "{}", serde_json::to_string(&reveal)?)?;
            }
        }
        SessionOutcome::Help(table) => writeln!(out, "{}", table)?,
        SessionOutcome::Invalid(_) => writeln!(out, "Invalid move. Please try again.")?,
        SessionOutcome::Aborted => writeln!(out, "Goodbye.")?,
    }
    out.flush()?;

    Ok(session.state())
}

fn print_reveal<W: Write>(out: &mut W, reveal: &RevealMessage) -> io::Result<()> {
    writeln!(out, "Your move: {}", reveal.human_move)?;
    writeln!(out, "Computer move: {}", reveal.computer_move)?;
    writeln!(out, "You {}!", reveal.outcome)?;
    writeln!(out, "HMAC key: {}", reveal.key)
}
