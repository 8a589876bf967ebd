//! # Todoz CLI
//!
//! The binary is intentionally thin: argument parsing, context wiring and
//! rendering live in `cli/`, while this file only sets up logging, invokes
//! `cli::run()` and turns the outcome into an exit code.
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI is responsible for
//! all user-facing concerns: choosing the data directory, opening the store,
//! printing views and messages, and exit status.

mod cli;

fn main() {
    match cli::run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
