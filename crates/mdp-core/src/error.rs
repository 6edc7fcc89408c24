//! Fetch error taxonomy shared by the engine and the HTTP surface.

use std::io;
use thiserror::Error;

/// Error raised while proxying a media URL.
///
/// Every variant carries a description fit for the user-facing error body;
/// none of them may leave a scratch directory behind (the orchestrator
/// drops the directory guard before any of these propagate).
#[derive(Debug, Error)]
pub enum FetchError {
    /// yt-dlp executable not found (config override and `$PATH` both
    /// exhausted). Raised before any resource allocation.
    #[error("yt-dlp executable not found; install it or set `ytdlp_path` in config.toml")]
    ToolMissing,

    /// The extractor ran but could not resolve or fetch the URL
    /// (network error, unsupported or private content, platform block).
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// The extractor's info JSON could not be parsed.
    #[error("malformed extractor output: {0}")]
    Parse(#[from] serde_json::Error),

    /// Extraction reported success but no file was locatable, even after
    /// scanning the scratch directory.
    #[error("download produced no file")]
    NoArtifact,

    /// The media has no thumbnail to serve.
    #[error("no thumbnail available for this media")]
    NoThumbnail,

    /// The media has no usable caption track.
    #[error("no caption track available for this media")]
    NoCaptions,

    /// HTTP fetch of a thumbnail or caption track failed.
    #[error("http: {0}")]
    Http(#[from] curl::Error),

    /// Process spawn or filesystem failure.
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

impl FetchError {
    /// Builds an [`FetchError::Extraction`] from the tool's stderr,
    /// surfacing the last `ERROR:` line when one exists, otherwise the
    /// last non-empty line.
    pub fn from_tool_stderr(stderr: &str) -> Self {
        let message = stderr
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| line.starts_with("ERROR:"))
            .or_else(|| {
                stderr
                    .lines()
                    .rev()
                    .map(str::trim)
                    .find(|line| !line.is_empty())
            })
            .unwrap_or("yt-dlp failed");
        Self::Extraction(message.to_string())
    }
}
