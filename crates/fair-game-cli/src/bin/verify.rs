//! HMAC verifier
//!
//! Recomputes HMAC-SHA256(key, move) from what `fair-game` revealed and
//! compares it with the HMAC it printed before the move was entered.
//!
//! Usage: fair-game-verify --key <hex> --move Rock --hmac <hex>

use clap::Parser;
use fair_game_core::{HmacKey, MacDigest};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fair-game-verify")]
#[command(about = "Check that a revealed key and move match a published HMAC")]
struct Args {
    /// Key printed after the round ("HMAC key: ...")
    #[arg(long)]
    key: HmacKey,

    /// Computer move printed after the round
    #[arg(long = "move")]
    move_name: String,

    /// HMAC printed before the round ("HMAC: ...")
    #[arg(long)]
    hmac: MacDigest,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!(key = ?args.key, hmac = %args.hmac, "verifying");

    if verify(&args) {
        println!("HMAC verified: {} was committed", args.move_name);
    } else {
        println!("HMAC mismatch: {} was not committed under this key", args.move_name);
        std::process::exit(1);
    }
}

fn verify(args: &Args) -> bool {
    args.hmac.verify(&args.key, args.move_name.as_bytes())
}
