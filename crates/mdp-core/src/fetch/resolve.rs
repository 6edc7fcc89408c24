//! Output path resolution with directory-scan fallback.

use std::path::PathBuf;

use crate::error::FetchError;
use crate::scratch::ScratchDir;

use super::ytdlp::MediaInfo;

/// Resolves the file yt-dlp actually produced.
///
/// Preference order: the first path reported under `requested_downloads`,
/// then the tool's predicted `filename`. If the preferred candidate does
/// not exist on disk, any file found in the scratch directory is taken
/// instead. The scan is ambiguous when multiple files are present (e.g.
/// separate video and audio parts before muxing); the first match wins.
pub fn resolve_artifact(info: &MediaInfo, scratch: &ScratchDir) -> Result<PathBuf, FetchError> {
    let candidate = info
        .requested_downloads
        .iter()
        .find_map(|d| d.filepath.as_ref())
        .or(info.filename.as_ref());

    if let Some(path) = candidate {
        if path.is_file() {
            return Ok(path.clone());
        }
        tracing::debug!(
            path = %path.display(),
            "reported download path missing, scanning scratch dir"
        );
    }

    match scratch.first_file()? {
        Some(path) => Ok(path),
        None => Err(FetchError::NoArtifact),
    }
}
