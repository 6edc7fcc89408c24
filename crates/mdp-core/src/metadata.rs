//! Metadata-only operations: probing and thumbnail download.
//!
//! Nothing here touches the scratch layer; probes write no files.

use crate::config::MdpConfig;
use crate::error::FetchError;
use crate::fetch::ytdlp;
use crate::fetch::MediaInfo;
use crate::filename;
use crate::http;

/// Probes `url` without downloading anything.
///
/// Blocks for the duration of the probe; run under `spawn_blocking` from
/// async code.
pub fn probe_media(cfg: &MdpConfig, url: &str) -> Result<MediaInfo, FetchError> {
    ytdlp::run_probe(cfg, url)
}

/// Thumbnail bytes ready to be served as an attachment.
#[derive(Debug)]
pub struct Thumbnail {
    pub bytes: Vec<u8>,
    pub media_type: String,
    pub filename: String,
}

/// Probes `url` and downloads its thumbnail image.
pub fn fetch_thumbnail(cfg: &MdpConfig, url: &str) -> Result<Thumbnail, FetchError> {
    let info = probe_media(cfg, url)?;
    let thumb_url = info.thumbnail.as_deref().ok_or(FetchError::NoThumbnail)?;

    let (bytes, content_type) = http::get_bytes(thumb_url)?;
    let media_type = content_type.unwrap_or_else(|| "image/jpeg".to_string());
    let filename = filename::thumbnail_name(info.display_title());
    tracing::debug!(url, thumb_url, size = bytes.len(), "thumbnail fetched");

    Ok(Thumbnail {
        bytes,
        media_type,
        filename,
    })
}
