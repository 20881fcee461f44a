//! CLI command definitions and dispatch.
//!
//! This module provides the command-line interface for soundgrab.
//! Each area is implemented in its own submodule:
//! - `download`: YouTube and SoundCloud download commands
//! - `settings`: download-directory configuration
//!
//! Running with no subcommand drops into a one-shot interactive menu that
//! mirrors the subcommands.

mod download;
mod settings;

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::SettingsStore;

pub use download::{cmd_soundcloud, cmd_youtube};
pub use settings::cmd_set_dir;

/// Soundgrab CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Download the audio of a YouTube video
    Youtube {
        /// Video URL
        url: String,
        /// Save into this directory instead of the configured one
        #[arg(short, long)]
        directory: Option<PathBuf>,
    },
    /// Download a SoundCloud track and tag it
    Soundcloud {
        /// Public track URL
        url: String,
        /// API client id (or set SOUNDCLOUD_CLIENT_ID env var)
        #[arg(short, long, env = "SOUNDCLOUD_CLIENT_ID")]
        client_id: Option<String>,
        /// Save into this directory instead of the configured one
        #[arg(short, long)]
        directory: Option<PathBuf>,
    },
    /// Change the configured download directory
    SetDir {
        /// New download directory (prompted for when omitted)
        path: Option<String>,
    },
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command was
/// specified (meaning the interactive menu should run).
pub fn run_command(cli: &Cli) -> anyhow::Result<bool> {
    let rt = Runtime::new()?;
    let store = SettingsStore::open_default();

    match &cli.command {
        Some(Commands::Youtube { url, directory }) => {
            cmd_youtube(url, directory.as_deref(), &store)?;
            Ok(true)
        }
        Some(Commands::Soundcloud {
            url,
            client_id,
            directory,
        }) => {
            cmd_soundcloud(&rt, url, client_id.as_deref(), directory.as_deref(), &store)?;
            Ok(true)
        }
        Some(Commands::SetDir { path }) => {
            cmd_set_dir(path.as_deref(), &store)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Run the interactive menu: one choice, one action, then exit.
pub fn run_menu() -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let store = SettingsStore::open_default();

    println!("Welcome to the Audio Downloader!");
    println!("1. Download YouTube audio");
    println!("2. Download Soundcloud audio");
    println!("M. Change download directory");

    let choice = prompt("Enter your choice: ")?;
    match choice.as_str() {
        "1" => {
            let url = prompt("Enter the YouTube video URL: ")?;
            cmd_youtube(&url, None, &store)
        }
        "2" => {
            let url = prompt("Enter the Soundcloud track URL: ")?;
            cmd_soundcloud(&rt, &url, None, None, &store)
        }
        "M" | "m" => cmd_set_dir(None, &store),
        _ => {
            println!("Invalid choice.");
            Ok(())
        }
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Print a prompt and read one trimmed line from stdin
pub(crate) fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
