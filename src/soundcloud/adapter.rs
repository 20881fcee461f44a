//! Adapter layer: Convert resolver DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if the resolver changes its response format,
//! only this file and dto.rs need to change.

use super::dto;
use crate::soundcloud::domain::{ResolveError, TrackMetadata};

/// Convert a resolved track payload to `TrackMetadata`.
///
/// The caller has already checked `kind == "track"`; here the payload must
/// still carry a title and a stream locator, and the optional fields fall
/// back to their placeholder values.
pub fn to_track_metadata(entity: dto::ResolvedEntity) -> Result<TrackMetadata, ResolveError> {
    let title = entity.title.ok_or(ResolveError::MissingField("title"))?;
    let stream_url = entity
        .stream_url
        .ok_or(ResolveError::MissingField("stream_url"))?;

    let artist = entity
        .user
        .and_then(|u| u.username)
        .unwrap_or_else(|| "Unknown Artist".to_string());

    let genre = entity
        .genre
        .unwrap_or_else(|| "Unknown Genre".to_string());

    let release_date = entity.created_at.as_deref().and_then(release_date);

    Ok(TrackMetadata {
        title,
        artist,
        genre,
        stream_url,
        release_date,
    })
}

/// Extract the date portion of the resolver's upload timestamp.
///
/// Timestamps arrive as ISO-8601 ("2023-05-01T10:00:00Z"); only the text
/// before the 'T' is kept. A value without a 'T' passes through whole.
fn release_date(created_at: &str) -> Option<String> {
    let date = created_at.split('T').next().unwrap_or_default();
    if date.is_empty() {
        None
    } else {
        Some(date.to_string())
    }
}
