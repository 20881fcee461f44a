//! Internal domain models for SoundCloud track downloads.
//!
//! These types are OUR types - they don't change when the resolver API changes.
//! All resolver responses get converted into these types via the adapter.

use std::path::PathBuf;
use std::sync::Arc;

/// Metadata for a single resolved track.
///
/// Built once per download attempt by `resolve_track` and never mutated
/// afterwards. Each attempt owns its own copy; nothing is cached between
/// attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMetadata {
    /// Track title as reported by the resolver
    pub title: String,
    /// Uploader name, or "Unknown Artist" when the resolver omits it
    pub artist: String,
    /// Genre, or "Unknown Genre" when the resolver omits it
    pub genre: String,
    /// Locator for the raw audio stream
    pub stream_url: String,
    /// Upload date (YYYY-MM-DD), already truncated from the resolver's timestamp
    pub release_date: Option<String>,
}

/// A file produced (or reused) by a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    /// Final path of the audio file
    pub path: PathBuf,
    /// Bytes written by this fetch; zero when an existing file was reused
    pub bytes_written: u64,
    /// True when the target already existed and no transfer was performed
    pub reused_existing: bool,
}

/// Result of a complete download attempt (resolve + fetch + tag).
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub track: TrackMetadata,
    pub file: DownloadedFile,
}

/// Progress callback invoked after each written chunk with the cumulative
/// byte count and the total size when the server reported one.
pub type ProgressCallback = Arc<dyn Fn(u64, Option<u64>) + Send + Sync>;

/// Errors from resolving a track URL to metadata
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("track URL is empty")]
    EmptyUrl,

    #[error("resolver request failed: {0}")]
    Network(String),

    #[error("track not found: {0}")]
    NotFound(String),

    #[error("resolver returned HTTP {0}")]
    Status(u16),

    #[error("failed to parse resolver response: {0}")]
    Parse(String),

    #[error("URL does not point to a track (resolved to a {kind})")]
    NotATrack { kind: String },

    #[error("resolver response missing field: {0}")]
    MissingField(&'static str),
}

/// Errors from transferring the audio stream to disk
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("stream request failed: {0}")]
    Network(String),

    #[error("stream endpoint returned HTTP {0}")]
    Status(u16),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors from writing tags into the downloaded file
#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("{path} is not a taggable audio file: {source}")]
    Unsupported {
        path: PathBuf,
        source: lofty::error::LoftyError,
    },

    #[error("failed to write tags to {path}: {source}")]
    Write {
        path: PathBuf,
        source: lofty::error::LoftyError,
    },
}

/// Umbrella error for a full download attempt.
///
/// Callers render this; the download pipeline never prints or exits itself.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("resolve failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("transfer failed: {0}")]
    Transfer(#[from] TransferError),

    #[error("tagging failed: {0}")]
    Tag(#[from] TagError),
}
