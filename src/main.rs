//! Bank Ledger CLI
//!
//! Interactive command loop over an in-memory bank account ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --quiet --input commands.txt
//! cargo run -- --first-account-number 1000 --log-level debug
//! ```
//!
//! Commands are read from stdin (or the `--input` script) and every report goes to
//! stdout. Diagnostics go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Session ended through EXIT or end of input
//! - 1: Error (input file not readable, I/O failure)

use bank_ledger::cli;
use bank_ledger::session::Session;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::from(args.log_level))
        .init();

    let input: Box<dyn BufRead> = match &args.input_file {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("Error: cannot open {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut session = Session::new(input, stdout.lock(), args.to_session_config());
    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
