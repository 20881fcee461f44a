//! Target filenames for downloaded tracks.
//!
//! Track titles come from the resolver and can contain anything; the saved
//! filename keeps alphanumerics, spaces, hyphens, underscores, and periods,
//! and replaces every other character with an underscore.

/// True for characters allowed to appear in a saved filename
fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.')
}

/// Replace disallowed characters with underscores.
///
/// One output character per input character; allowed characters pass
/// through in order.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if is_allowed(c) { c } else { '_' })
        .collect()
}

/// Filename for a track with the given title
pub fn track_filename(title: &str) -> String {
    format!("{}.mp3", sanitize_title(title))
}
