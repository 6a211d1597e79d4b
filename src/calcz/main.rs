//! # Calcz CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! Usage errors (unknown flags, missing or malformed operands) are reported by clap
//! before anything runs and exit with status 2. Errors returned from the library,
//! such as an overflow under the `checked` policy, are printed here and exit with
//! status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
