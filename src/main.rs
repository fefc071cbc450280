//! gamestore CLI entry point
//!
//! Parses arguments, dispatches to CLI commands, prints errors to
//! stderr, and exits with non-zero on failure. Everything else is
//! delegated to the cli module.

use gamestore::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
