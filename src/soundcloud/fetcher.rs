//! Track fetcher - orchestrates a full download attempt
//!
//! One attempt walks resolve -> fetch -> tag:
//! 1. Resolve the public track URL to metadata (title, artist, stream locator)
//! 2. Stream the audio into the download directory, unless it is already there
//! 3. Write title/artist/genre/date tags into the saved file
//!
//! The fetcher returns typed errors and never prints; rendering outcomes is
//! the caller's job.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::soundcloud::client::SoundCloudClient;
use crate::soundcloud::domain::{
    DownloadError, DownloadOutcome, DownloadedFile, ProgressCallback, TrackMetadata, TransferError,
};
use crate::soundcloud::{naming, tagger};

/// Well-known public client id, used when no token is configured
pub const DEFAULT_CLIENT_ID: &str = "YHtBnq6bxM7DhJkIfzrGq3gYrueyLDMM";

/// Configuration for the track fetcher
pub struct FetcherConfig {
    /// Client id token sent to both the resolver and the stream endpoint
    pub client_id: String,
    /// Directory downloaded tracks are saved into
    pub download_dir: PathBuf,
    /// Connect/read timeout for HTTP requests
    pub request_timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_string(),
            download_dir: PathBuf::from("downloads"),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Downloads single tracks into the configured directory
pub struct TrackFetcher {
    config: FetcherConfig,
    client: SoundCloudClient,
    progress: Option<ProgressCallback>,
}

impl TrackFetcher {
    /// Create a new fetcher with the given config
    pub fn new(config: FetcherConfig) -> Self {
        let client = SoundCloudClient::new(&config.client_id, config.request_timeout);
        Self {
            config,
            client,
            progress: None,
        }
    }

    /// Create a fetcher for testing with a custom API base URL
    #[cfg(test)]
    pub fn with_base_url(config: FetcherConfig, base_url: impl Into<String>) -> Self {
        let client = SoundCloudClient::with_base_url(&config.client_id, base_url);
        Self {
            config,
            client,
            progress: None,
        }
    }

    /// Install a callback invoked after each written chunk with the
    /// cumulative byte count and the total size when the server sent one
    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.progress = Some(callback);
    }

    /// Run a full download attempt for a public track URL.
    ///
    /// Tags are written even when the file already existed, so a reused
    /// file ends up with the same metadata a fresh download would carry.
    pub async fn download(&self, track_url: &str) -> Result<DownloadOutcome, DownloadError> {
        let track = self.client.resolve_track(track_url).await?;
        tracing::info!("Resolved track: {} by {}", track.title, track.artist);

        let file = self.fetch(&track).await?;
        tagger::write_tags(&file.path, &track)?;

        Ok(DownloadOutcome { track, file })
    }

    /// Transfer a resolved track's audio into the download directory.
    ///
    /// A file already at the target path is treated as complete: it is
    /// returned as-is and no network request is made. Fresh transfers are
    /// streamed chunk-by-chunk into a `.part` sibling and renamed into
    /// place only once the stream has fully drained, so a failed transfer
    /// never leaves a partial file at the final path.
    pub async fn fetch(&self, track: &TrackMetadata) -> Result<DownloadedFile, TransferError> {
        let dir = &self.config.download_dir;
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| TransferError::Io {
                path: dir.clone(),
                source: e,
            })?;

        let path = dir.join(naming::track_filename(&track.title));
        if path.exists() {
            tracing::info!("Track already exists: {}", path.display());
            return Ok(DownloadedFile {
                path,
                bytes_written: 0,
                reused_existing: true,
            });
        }

        let response = self.client.open_stream(&track.stream_url).await?;
        let total = response.content_length();

        let temp_path = path.with_extension("mp3.part");
        let bytes_written = match self.write_stream(response, &temp_path, total).await {
            Ok(n) => n,
            Err(e) => {
                // Leave nothing behind; the next attempt starts from scratch
                let _ = tokio::fs::remove_file(&temp_path).await;
                return Err(e);
            }
        };

        tokio::fs::rename(&temp_path, &path)
            .await
            .map_err(|e| TransferError::Io {
                path: path.clone(),
                source: e,
            })?;

        tracing::info!("Downloaded {} bytes to {}", bytes_written, path.display());

        Ok(DownloadedFile {
            path,
            bytes_written,
            reused_existing: false,
        })
    }

    /// Drain the response body into `temp_path`, reporting progress as each
    /// chunk lands. Peak memory stays bounded by one chunk.
    async fn write_stream(
        &self,
        response: reqwest::Response,
        temp_path: &Path,
        total: Option<u64>,
    ) -> Result<u64, TransferError> {
        let mut file = tokio::fs::File::create(temp_path)
            .await
            .map_err(|e| TransferError::Io {
                path: temp_path.to_path_buf(),
                source: e,
            })?;

        let mut stream = response.bytes_stream();
        let mut bytes_written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| TransferError::Network(e.to_string()))?;
            file.write_all(&chunk)
                .await
                .map_err(|e| TransferError::Io {
                    path: temp_path.to_path_buf(),
                    source: e,
                })?;
            bytes_written += chunk.len() as u64;

            if let Some(ref progress) = self.progress {
                progress(bytes_written, total);
            }
        }

        file.flush().await.map_err(|e| TransferError::Io {
            path: temp_path.to_path_buf(),
            source: e,
        })?;
        file.sync_all().await.map_err(|e| TransferError::Io {
            path: temp_path.to_path_buf(),
            source: e,
        })?;

        Ok(bytes_written)
    }
}
