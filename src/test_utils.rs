//! Test utilities and fixtures for soundgrab tests.
//!
//! Provides mock metadata factories, a byte-exact minimal MP3 payload that
//! lofty can probe and tag, and an in-process HTTP server for exercising
//! the resolver and stream endpoints without the network.

use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;

use crate::soundcloud::TrackMetadata;

/// Creates a mock TrackMetadata with sensible defaults.
///
/// Use struct update syntax or field assignment to customize:
///
/// ```ignore
/// let mut track = mock_track("Song: Test");
/// track.release_date = None;
/// ```
pub fn mock_track(title: &str) -> TrackMetadata {
    TrackMetadata {
        title: title.to_string(),
        artist: "someone".to_string(),
        genre: "Electronic".to_string(),
        stream_url: "https://api.soundcloud.com/tracks/1/stream".to_string(),
        release_date: Some("2023-05-01".to_string()),
    }
}

/// A small but structurally valid MP3 payload.
///
/// Four MPEG-1 Layer III frames (128 kbit/s, 44.1 kHz, no CRC), each 417
/// bytes: a real frame header followed by zeroed audio data. That is enough
/// for lofty to probe the container and write tags into it.
pub fn minimal_mp3() -> Vec<u8> {
    const FRAME_LEN: usize = 417; // 144 * 128000 / 44100, no padding
    const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];

    let mut data = Vec::with_capacity(FRAME_LEN * 4);
    for _ in 0..4 {
        let mut frame = vec![0u8; FRAME_LEN];
        frame[..4].copy_from_slice(&FRAME_HEADER);
        data.extend_from_slice(&frame);
    }
    data
}

/// Write the minimal MP3 fixture to `path`
pub fn write_minimal_mp3(path: &Path) {
    std::fs::write(path, minimal_mp3()).expect("Failed to write MP3 fixture");
}

/// In-process HTTP server backing client and fetcher tests.
///
/// Binds an ephemeral localhost port and serves the given router until the
/// server is dropped.
pub struct TestServer {
    base_url: String,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Serve a fixed router
    pub async fn start(router: Router) -> Self {
        Self::start_with(move |_| router).await
    }

    /// Serve a router built from the server's own base URL, for payloads
    /// that must point back at the server (e.g. resolver responses carrying
    /// a stream locator).
    pub async fn start_with(make_router: impl FnOnce(&str) -> Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}");

        let router = make_router(&base_url);
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let server = axum::serve(listener, router).with_graceful_shutdown(async {
            shutdown_rx.await.ok();
        });

        tokio::spawn(async move {
            server.await.unwrap();
        });

        // Give the accept loop a moment to come up
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        Self {
            base_url,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_mp3_is_frame_aligned() {
        let data = minimal_mp3();
        assert_eq!(data.len(), 417 * 4);
        // Every frame starts with a sync word
        for frame in data.chunks(417) {
            assert_eq!(&frame[..2], &[0xFF, 0xFB]);
        }
    }

    #[test]
    fn test_minimal_mp3_probes_as_audio() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.mp3");
        write_minimal_mp3(&path);

        lofty::probe::Probe::open(&path)
            .unwrap()
            .read()
            .expect("fixture should probe as an audio file");
    }
}
