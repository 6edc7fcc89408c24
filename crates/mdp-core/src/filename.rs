//! Attachment filenames and content-type inference.

use std::path::Path;

/// Fallback name when an artifact has no usable basename.
const DEFAULT_FILENAME: &str = "download.bin";

/// Sanitizes a media title for use in a filename: keeps alphanumerics,
/// spaces and underscores, trims trailing whitespace, then turns spaces
/// into underscores.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
        .collect();
    kept.trim_end().replace(' ', "_")
}

/// Suggested attachment name for a resolved artifact: its basename.
pub fn attachment_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_FILENAME)
        .to_string()
}

/// Content type inferred from the file extension;
/// `application/octet-stream` when nothing matches.
pub fn media_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string()
}

/// Attachment name for a thumbnail derived from the media title.
pub fn thumbnail_name(title: &str) -> String {
    let base = sanitize_title(title);
    if base.is_empty() {
        "media_thumbnail.jpg".to_string()
    } else {
        format!("{}_thumbnail.jpg", base)
    }
}
