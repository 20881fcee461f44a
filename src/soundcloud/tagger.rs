//! Tag writing for downloaded audio files.
//!
//! Uses the lofty crate for format-independent tag access. Downloads are
//! MP3, but lofty picks the right tag type from the container, so nothing
//! here is ID3-specific.

use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag, TagExt};
use std::path::Path;

use crate::soundcloud::domain::{TagError, TrackMetadata};

/// Write title, artist, genre, and (when known) date into the file at `path`.
///
/// The file must already exist and be a readable audio container; tags are
/// saved back in place.
pub fn write_tags(path: &Path, track: &TrackMetadata) -> Result<(), TagError> {
    let mut tagged_file = Probe::open(path)
        .map_err(|e| TagError::Unsupported {
            path: path.to_path_buf(),
            source: e,
        })?
        .read()
        .map_err(|e| TagError::Unsupported {
            path: path.to_path_buf(),
            source: e,
        })?;

    // Get the primary tag type for this format, or create one
    let tag_type = tagged_file.primary_tag_type();

    let tag = if let Some(tag) = tagged_file.tag_mut(tag_type) {
        tag
    } else {
        tagged_file.insert_tag(Tag::new(tag_type));
        tagged_file.tag_mut(tag_type).expect("Just inserted tag")
    };

    tag.set_title(track.title.clone());
    tag.set_artist(track.artist.clone());
    tag.set_genre(track.genre.clone());
    if let Some(ref date) = track.release_date {
        tag.insert_text(ItemKey::RecordingDate, date.clone());
    }

    tag.save_to_path(path, WriteOptions::default())
        .map_err(|e| TagError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!("Tagged {}: {} / {}", path.display(), track.artist, track.title);

    Ok(())
}
