//! SoundCloud HTTP client
//!
//! Talks to the public resolver and stream endpoints. Both take the client
//! id token as a query parameter; the resolver answers with a JSON entity
//! payload, the stream endpoint with raw audio bytes.

use std::time::Duration;

use super::{adapter, dto};
use crate::soundcloud::domain::{ResolveError, TrackMetadata, TransferError};

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const DEFAULT_BASE_URL: &str = "https://api.soundcloud.com";

/// SoundCloud API client
pub struct SoundCloudClient {
    client_id: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl SoundCloudClient {
    /// Create a new client with the given client id token.
    ///
    /// The timeout applies to connecting and to reads going quiet, not to a
    /// whole request; a long audio transfer is allowed to run as long as
    /// bytes keep arriving.
    pub fn new(client_id: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true) // Accept gzip-compressed resolver responses
            .user_agent(USER_AGENT)
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client_id: client_id.into(),
            http_client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(client_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve a public track URL to track metadata.
    ///
    /// The resolver accepts any public URL, so the result is checked to be
    /// a track before conversion; user profiles and playlists are rejected.
    pub async fn resolve_track(&self, track_url: &str) -> Result<TrackMetadata, ResolveError> {
        if track_url.trim().is_empty() {
            return Err(ResolveError::EmptyUrl);
        }

        let entity = self.send_resolve_request(track_url).await?;

        if entity.kind != "track" {
            return Err(ResolveError::NotATrack { kind: entity.kind });
        }

        adapter::to_track_metadata(entity)
    }

    /// Send the HTTP request and parse the response
    async fn send_resolve_request(
        &self,
        track_url: &str,
    ) -> Result<dto::ResolvedEntity, ResolveError> {
        let url = format!(
            "{}/resolve?url={}&client_id={}",
            self.base_url,
            urlencoding::encode(track_url),
            urlencoding::encode(&self.client_id)
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ResolveError::NotFound(track_url.to_string()));
        }

        if !status.is_success() {
            return Err(ResolveError::Status(status.as_u16()));
        }

        response
            .json::<dto::ResolvedEntity>()
            .await
            .map_err(|e| ResolveError::Parse(e.to_string()))
    }

    /// Open the audio stream behind a resolved stream locator.
    ///
    /// Returns the raw response so the caller can drain the body in chunks;
    /// `content_length()` on it drives progress reporting when present.
    pub async fn open_stream(&self, stream_url: &str) -> Result<reqwest::Response, TransferError> {
        let url = self.stream_request_url(stream_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransferError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransferError::Status(status.as_u16()));
        }

        Ok(response)
    }

    /// Append the client id to a stream locator, which may already carry a
    /// query string of its own.
    fn stream_request_url(&self, stream_url: &str) -> String {
        let separator = if stream_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}client_id={}",
            stream_url,
            separator,
            urlencoding::encode(&self.client_id)
        )
    }
}
