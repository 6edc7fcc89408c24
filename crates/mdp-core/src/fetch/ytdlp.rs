//! yt-dlp invocation and the subset of its info JSON the proxy consumes.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::MdpConfig;
use crate::error::FetchError;
use crate::format::FormatSpec;
use crate::probe;

/// Output filename template expanded by yt-dlp inside the scratch dir.
const OUTPUT_TEMPLATE: &str = "%(title)s [%(id)s].%(ext)s";

/// One entry of the info JSON's `requested_downloads` list.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestedDownload {
    pub filepath: Option<PathBuf>,
}

/// Caption tracks keyed by language code (e.g. `en`, `en-US`).
pub type CaptionMap = BTreeMap<String, Vec<CaptionTrack>>;

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionTrack {
    pub url: Option<String>,
    pub ext: Option<String>,
}

/// The fields of the yt-dlp info record the proxy reads. Everything is
/// optional; platforms differ wildly in what they report.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    /// The tool's own prediction of the output filename.
    pub filename: Option<PathBuf>,
    #[serde(default)]
    pub requested_downloads: Vec<RequestedDownload>,
    #[serde(default)]
    pub subtitles: CaptionMap,
    #[serde(default)]
    pub automatic_captions: CaptionMap,
}

impl MediaInfo {
    /// Title to show/name things after when the platform reported one.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("media")
    }
}

fn base_command(cfg: &MdpConfig) -> Result<Command, FetchError> {
    let binary = probe::resolve_ytdlp(cfg).ok_or(FetchError::ToolMissing)?;
    let mut command = Command::new(binary);
    command.arg("--no-playlist").arg("--no-warnings");
    Ok(command)
}

fn run(mut command: Command) -> Result<MediaInfo, FetchError> {
    let output = command.output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(FetchError::from_tool_stderr(&stderr));
    }
    let info: MediaInfo = serde_json::from_slice(&output.stdout)?;
    Ok(info)
}

/// Runs yt-dlp with download enabled, output constrained to `scratch`,
/// and returns the parsed info record. Blocks for the full extraction.
pub fn run_download(
    cfg: &MdpConfig,
    url: &str,
    format: &FormatSpec,
    scratch: &Path,
) -> Result<MediaInfo, FetchError> {
    let mut command = base_command(cfg)?;
    command
        .arg("-J")
        .arg("--no-simulate")
        .arg("--restrict-filenames")
        .arg("-f")
        .arg(format.render())
        .arg("-o")
        .arg(scratch.join(OUTPUT_TEMPLATE))
        .arg(url);
    run(command)
}

/// Runs yt-dlp in probe mode (no download) and returns the info record.
pub fn run_probe(cfg: &MdpConfig, url: &str) -> Result<MediaInfo, FetchError> {
    let mut command = base_command(cfg)?;
    command.arg("-J").arg("--skip-download").arg(url);
    run(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_json_minimal_fields() {
        let info: MediaInfo = serde_json::from_str(r#"{"id": "abc123"}"#).unwrap();
        assert_eq!(info.id.as_deref(), Some("abc123"));
        assert_eq!(info.display_title(), "media");
        assert!(info.requested_downloads.is_empty());
        assert!(info.subtitles.is_empty());
    }

    #[test]
    fn info_json_requested_downloads_and_captions() {
        let raw = r#"{
            "title": "Clip",
            "requested_downloads": [{"filepath": "/tmp/clip.mp4"}, {}],
            "automatic_captions": {
                "en": [{"url": "https://example.com/c", "ext": "json3"}]
            }
        }"#;
        let info: MediaInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.display_title(), "Clip");
        assert_eq!(
            info.requested_downloads[0].filepath,
            Some(PathBuf::from("/tmp/clip.mp4"))
        );
        assert!(info.requested_downloads[1].filepath.is_none());
        assert_eq!(info.automatic_captions["en"][0].ext.as_deref(), Some("json3"));
    }
}
