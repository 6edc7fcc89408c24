//! Generic media fetch: scratch allocation, extraction, artifact
//! resolution.
//!
//! Per request the lifecycle is
//! allocated → extracting → resolved-or-failed → cleaned, and cleanup
//! fires exactly once on every path: failures drop the scratch guard
//! before the error leaves this module, successes carry the guard inside
//! [`FetchedMedia`] until the caller is done streaming the file.

mod resolve;
pub mod ytdlp;

pub use ytdlp::MediaInfo;

use std::path::{Path, PathBuf};

use crate::config::MdpConfig;
use crate::error::FetchError;
use crate::filename;
use crate::format::FormatSpec;
use crate::scratch::ScratchDir;

/// A downloaded artifact plus the scratch directory that contains it.
///
/// Dropping the value deletes the directory, so it must be kept alive
/// until the file has been fully handed off.
#[derive(Debug)]
pub struct FetchedMedia {
    scratch: ScratchDir,
    /// Absolute path of the resolved artifact, inside `scratch`.
    pub path: PathBuf,
    /// Content type inferred from the artifact extension.
    pub media_type: String,
    /// Suggested attachment filename (the artifact's basename).
    pub filename: String,
}

impl FetchedMedia {
    pub fn scratch_path(&self) -> &Path {
        self.scratch.path()
    }
}

/// Downloads `url` with the given format selection and resolves the file
/// the extractor produced.
///
/// The extraction call blocks for its full duration (potentially many
/// seconds for large media); run under `spawn_blocking` from async code.
/// No retries and no internal timeout. On any failure the request's
/// scratch directory is removed synchronously before the error returns.
pub fn fetch_media(
    cfg: &MdpConfig,
    url: &str,
    format: &FormatSpec,
) -> Result<FetchedMedia, FetchError> {
    let scratch = ScratchDir::allocate(cfg.scratch_dir.as_deref())?;
    // Every `?` below drops `scratch`, deleting the directory before the
    // error leaves this function.
    let info = ytdlp::run_download(cfg, url, format, scratch.path())?;
    let path = resolve::resolve_artifact(&info, &scratch)?;

    let filename = filename::attachment_name(&path);
    let media_type = filename::media_type(&path);
    tracing::info!(url, path = %path.display(), media_type = %media_type, "fetch resolved");

    Ok(FetchedMedia {
        scratch,
        path,
        media_type,
        filename,
    })
}
