//! SoundCloud resolver API Data Transfer Objects
//!
//! These types match what the /resolve endpoint returns.
//! DO NOT use these types outside the soundcloud module - convert to domain
//! types via the adapter.
//!
//! The resolver answers for any public URL, so the payload may describe a
//! track, a user profile, or a playlist. Only `kind` is guaranteed; every
//! other field is optional so non-track payloads still deserialize and can
//! be rejected by the kind check instead of failing as a parse error.

use serde::{Deserialize, Serialize};

/// Entity returned by the /resolve endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolvedEntity {
    /// Discriminator: "track", "user", "playlist", ...
    pub kind: String,
    /// Track title
    pub title: Option<String>,
    /// Locator for the raw audio stream
    pub stream_url: Option<String>,
    /// Uploader info
    pub user: Option<ResolvedUser>,
    /// Genre label
    pub genre: Option<String>,
    /// Upload timestamp (ISO-8601, e.g. "2023-05-01T10:00:00Z")
    pub created_at: Option<String>,
}

/// Uploader info nested in a track payload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolvedUser {
    pub username: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
