//! YouTube audio extraction using yt-dlp
//!
//! This module shells out to the `yt-dlp` command-line tool to fetch the
//! best audio stream and convert it to MP3. Shelling out is more reliable
//! than bindings and works on all platforms where yt-dlp is installed.
//!
//! Install yt-dlp:
//! - Windows: `winget install yt-dlp`
//! - macOS: `brew install yt-dlp`
//! - Linux: `apt install yt-dlp`, `pipx install yt-dlp`, or equivalent

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Common installation paths for yt-dlp on Windows
#[cfg(windows)]
const YT_DLP_PATHS: &[&str] = &[
    "yt-dlp", // In PATH
    r"C:\Program Files\yt-dlp\yt-dlp.exe",
    r"C:\yt-dlp\yt-dlp.exe",
];

#[cfg(not(windows))]
const YT_DLP_PATHS: &[&str] = &[
    "yt-dlp", // In PATH
    "/usr/bin/yt-dlp",
    "/usr/local/bin/yt-dlp",
    "/opt/homebrew/bin/yt-dlp",
];

/// YouTube extraction errors
#[derive(Debug, thiserror::Error)]
pub enum YoutubeError {
    #[error("video URL is empty")]
    EmptyUrl,

    #[error(
        "yt-dlp not found. Please install it: https://github.com/yt-dlp/yt-dlp#installation"
    )]
    ToolMissing,

    #[error("Failed to create download directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to run yt-dlp: {0}")]
    Spawn(std::io::Error),

    #[error("yt-dlp exited unsuccessfully ({0})")]
    Extraction(std::process::ExitStatus),
}

/// Find the yt-dlp executable, checking common installation paths
fn find_yt_dlp() -> Option<&'static str> {
    YT_DLP_PATHS
        .iter()
        .find(|&path| {
            Command::new(path)
                .arg("--version")
                .output()
                .map(|o| o.status.success())
                .unwrap_or(false)
        })
        .copied()
}

/// Arguments for extracting the best audio as a 192K MP3 into `download_dir`,
/// named after the video title
fn audio_args(url: &str, download_dir: &Path) -> Vec<OsString> {
    let output_template = download_dir.join("%(title)s.%(ext)s");
    vec![
        OsString::from("--format"),
        OsString::from("bestaudio/best"),
        OsString::from("--extract-audio"),
        OsString::from("--audio-format"),
        OsString::from("mp3"),
        OsString::from("--audio-quality"),
        OsString::from("192K"),
        OsString::from("--output"),
        output_template.into_os_string(),
        OsString::from(url),
    ]
}

/// Download the audio of a video into `download_dir`.
///
/// yt-dlp inherits the terminal, so its own progress output is visible
/// while the download runs.
pub fn download_audio(url: &str, download_dir: &Path) -> Result<(), YoutubeError> {
    if url.trim().is_empty() {
        return Err(YoutubeError::EmptyUrl);
    }

    let tool = find_yt_dlp().ok_or(YoutubeError::ToolMissing)?;

    std::fs::create_dir_all(download_dir)
        .map_err(|e| YoutubeError::CreateDir(download_dir.to_path_buf(), e))?;

    tracing::info!("Extracting audio via {} into {}", tool, download_dir.display());

    let status = Command::new(tool)
        .args(audio_args(url, download_dir))
        .status()
        .map_err(YoutubeError::Spawn)?;

    if !status.success() {
        return Err(YoutubeError::Extraction(status));
    }

    Ok(())
}

/// Check if yt-dlp is available on the system
pub fn is_yt_dlp_available() -> bool {
    find_yt_dlp().is_some()
}

/// Get yt-dlp version string (for diagnostics)
pub fn get_yt_dlp_version() -> Option<String> {
    let tool = find_yt_dlp()?;
    Command::new(tool)
        .arg("--version")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
}
