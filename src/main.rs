//! soundgrab - a small audio downloader.
//!
//! Downloads audio from YouTube (via yt-dlp) and SoundCloud (via its public
//! resolver API), saves MP3s into a configurable directory, and writes
//! title/artist/genre/date tags. Run with a subcommand for scripted use, or
//! with no arguments for the interactive menu.

pub mod cli;
pub mod config;
pub mod soundcloud;
#[cfg(test)]
pub mod test_utils;
pub mod youtube;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("soundgrab=info".parse().unwrap()))
        .init();

    // Try to run a CLI command
    if cli::run_command(&args)? {
        // A command was executed, exit normally
        return Ok(());
    }

    // No command specified, run the interactive menu
    cli::run_menu()
}
