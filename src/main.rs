//! Exchange Normalizer CLI
//!
//! Reads one exchange export file, detects its layout and prints the
//! canonical transactions as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- exchange_export.csv > transactions.json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use exchange_normalizer::{write_transactions, NormalizeError, Result, StatementParser};
use std::env;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(NormalizeError::MissingArgument);
    }

    let input_path = &args[1];
    let parser = StatementParser::new();
    let transactions = parser.parse_path(input_path)?.into_result()?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    write_transactions(&transactions, handle)?;

    Ok(())
}
