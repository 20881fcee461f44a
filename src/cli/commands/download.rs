//! YouTube and SoundCloud download commands.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::runtime::Runtime;

use crate::config::SettingsStore;
use crate::soundcloud::{DEFAULT_CLIENT_ID, FetcherConfig, ProgressCallback, TrackFetcher};
use crate::youtube;

/// Download the audio of a YouTube video into the configured directory
pub fn cmd_youtube(
    url: &str,
    directory: Option<&Path>,
    store: &SettingsStore,
) -> anyhow::Result<()> {
    // Check if yt-dlp is available
    if !youtube::is_yt_dlp_available() {
        print_yt_dlp_install_instructions();
        return Ok(());
    }
    if let Some(version) = youtube::get_yt_dlp_version() {
        tracing::debug!("Using yt-dlp {}", version);
    }

    let settings = store.load();
    let download_dir = directory.unwrap_or(&settings.download_directory);

    println!(
        "Downloading audio from YouTube to '{}'...",
        download_dir.display()
    );
    match youtube::download_audio(url, download_dir) {
        Ok(()) => {
            println!("Download complete!");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
        }
    }
    Ok(())
}

/// Download a SoundCloud track and tag it.
///
/// Settings are re-loaded from the store for each call, so a directory
/// change made elsewhere is picked up by the next download. Failures are
/// rendered as a single error line; the process continues normally.
pub fn cmd_soundcloud(
    rt: &Runtime,
    url: &str,
    client_id: Option<&str>,
    directory: Option<&Path>,
    store: &SettingsStore,
) -> anyhow::Result<()> {
    let settings = store.load();
    let download_dir = directory
        .map(Path::to_path_buf)
        .unwrap_or(settings.download_directory);

    let config = FetcherConfig {
        client_id: resolve_client_id(client_id),
        download_dir,
        ..FetcherConfig::default()
    };
    let mut fetcher = TrackFetcher::new(config);
    let progress_rendered = Arc::new(AtomicBool::new(false));
    fetcher.set_progress_callback(progress_renderer(progress_rendered.clone()));

    rt.block_on(async {
        match fetcher.download(url).await {
            Ok(outcome) => {
                if outcome.file.reused_existing {
                    println!("Track already exists: {}", outcome.file.path.display());
                } else {
                    if progress_rendered.load(Ordering::Relaxed) {
                        println!();
                    }
                    println!(
                        "Downloaded: {} ({})",
                        outcome.file.path.display(),
                        format_bytes(outcome.file.bytes_written)
                    );
                }
                println!(
                    "Tagged: {} by {}",
                    outcome.track.title, outcome.track.artist
                );
            }
            Err(e) => {
                if progress_rendered.load(Ordering::Relaxed) {
                    println!();
                }
                eprintln!("Error: {}", e);
            }
        }
    });
    Ok(())
}

/// Pick the client id: flag value, then environment, then built-in default
fn resolve_client_id(flag: Option<&str>) -> String {
    if let Some(id) = flag {
        return id.to_string();
    }
    std::env::var("SOUNDCLOUD_CLIENT_ID").unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string())
}

/// Progress callback that renders the carriage-return line and records that
/// it did, so later output knows to move off that line first
fn progress_renderer(rendered: Arc<AtomicBool>) -> ProgressCallback {
    Arc::new(move |written, total| {
        rendered.store(true, Ordering::Relaxed);
        print_progress(written, total);
    })
}

/// Carriage-return progress line with cumulative bytes against the total
fn print_progress(written: u64, total: Option<u64>) {
    match total {
        Some(total) => print!(
            "\rDownloading... {} / {}",
            format_bytes(written),
            format_bytes(total)
        ),
        None => print!("\rDownloading... {}", format_bytes(written)),
    }
    use std::io::Write;
    std::io::stdout().flush().unwrap();
}

/// Format a byte count for humans
fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: u64 = 1024;

    if bytes < THRESHOLD {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD as f64 && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD as f64;
        unit_index += 1;
    }

    format!("{:.1} {}", size, UNITS[unit_index])
}

/// Print installation instructions for yt-dlp
fn print_yt_dlp_install_instructions() {
    eprintln!("Error: yt-dlp not found.");
    eprintln!("Install yt-dlp:");
    eprintln!("  Windows: winget install yt-dlp");
    eprintln!("  macOS:   brew install yt-dlp");
    eprintln!("  Linux:   apt install yt-dlp (or pipx install yt-dlp)");
}
