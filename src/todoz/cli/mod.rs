//! # CLI Behavior
//!
//! This is **one possible UI client** for todoz, not the application itself.
//!
//! ## Naked Execution (`todoz`)
//!
//! Running `todoz` with no arguments lists tasks with the configured default
//! filter. Reading is the common case and takes no typing.
//!
//! ## Mutations
//!
//! `add`, `toggle`, `delete` and `clear` print the command's messages followed
//! by the remaining-count line. Blank text or an unknown id is a warning and
//! exits 0; a failed save is an error and exits 1.
//!
//! ## Data Directory
//!
//! `--data-dir` picks where `todos.json` and `config.json` live; otherwise the
//! platform data directory is used.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `print`: output formatting
//! - `setup`: argument parsing via clap, logging setup

mod commands;
mod print;
mod setup;

pub use commands::run;
