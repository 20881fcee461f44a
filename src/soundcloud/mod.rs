//! SoundCloud track downloading.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types for tracks, outcomes, and errors
//! - **API DTOs** (`dto.rs`) - Exact resolver response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain models
//! - **Client** (`client.rs`) - HTTP client for the resolver and stream endpoints
//! - **Fetcher** (`fetcher.rs`) - High-level orchestration of one download attempt
//! - **Naming** (`naming.rs`) - Sanitized target filenames
//! - **Tagger** (`tagger.rs`) - Writes tag metadata into saved files
//!
//! The resolver API can change shape without rippling past dto.rs/adapter.rs,
//! and the contract tests pin what we rely on.
//!
//! # Usage
//!
//! ```ignore
//! use soundcloud::{FetcherConfig, TrackFetcher};
//!
//! let fetcher = TrackFetcher::new(FetcherConfig {
//!     download_dir: "downloads".into(),
//!     ..Default::default()
//! });
//! let outcome = fetcher.download("https://soundcloud.com/artist/track").await?;
//! println!("Saved {}", outcome.file.path.display());
//! ```

pub mod domain;
pub mod dto;
mod adapter;
mod client;
mod fetcher;
pub mod naming;
mod tagger;

pub use client::SoundCloudClient;
pub use domain::{DownloadError, DownloadOutcome, DownloadedFile, ProgressCallback, TrackMetadata};
pub use fetcher::{DEFAULT_CLIENT_ID, FetcherConfig, TrackFetcher};
pub use tagger::write_tags;
