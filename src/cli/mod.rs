//! Command-line interface for soundgrab.
//!
//! Subcommands run a single download or settings change directly; with no
//! subcommand the interactive menu takes over.

mod commands;

pub use commands::{Cli, Commands, run_command, run_menu};
