//! Transcript extraction from platform caption tracks.
//!
//! The probe record already carries caption-track URLs, so no second
//! extraction tool is involved: pick a track, fetch it, flatten the
//! `json3` event structure into plain text.

use serde::Deserialize;
use url::Url;

use crate::config::MdpConfig;
use crate::error::FetchError;
use crate::fetch::ytdlp::{CaptionMap, CaptionTrack};
use crate::fetch::MediaInfo;
use crate::http;
use crate::metadata;

/// Minimum length for a bare-path id (short-link style URLs).
const MIN_PATH_ID_LEN: usize = 8;

/// Extracts the video id from a watch URL: the `v` query parameter, or a
/// single bare path segment of at least 8 characters (`youtu.be/<id>`).
pub fn video_id(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    if let Some((_, value)) = parsed.query_pairs().find(|(key, _)| key == "v") {
        if !value.is_empty() {
            return Some(value.into_owned());
        }
    }
    let path = parsed.path().trim_matches('/');
    if path.len() >= MIN_PATH_ID_LEN && !path.contains('/') {
        Some(path.to_string())
    } else {
        None
    }
}

/// Picks a caption track: manual subtitles over automatic captions,
/// English over other languages, and only `json3` tracks (the one format
/// this module can flatten).
pub fn select_track(info: &MediaInfo) -> Option<&CaptionTrack> {
    select_from(&info.subtitles).or_else(|| select_from(&info.automatic_captions))
}

fn select_from(map: &CaptionMap) -> Option<&CaptionTrack> {
    let tracks = map
        .get("en")
        .or_else(|| {
            map.iter()
                .find(|(lang, _)| lang.starts_with("en"))
                .map(|(_, tracks)| tracks)
        })
        .or_else(|| map.values().next())?;
    tracks
        .iter()
        .find(|track| track.ext.as_deref() == Some("json3") && track.url.is_some())
}

#[derive(Debug, Deserialize)]
struct Json3Payload {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(default)]
    segs: Vec<Json3Seg>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    #[serde(default)]
    utf8: String,
}

/// Flattens a `json3` caption payload into a single plain-text string.
pub fn flatten_json3(payload: &[u8]) -> Result<String, FetchError> {
    let doc: Json3Payload = serde_json::from_slice(payload)?;
    let mut out = String::new();
    for event in &doc.events {
        for seg in &event.segs {
            let text = seg.utf8.trim();
            if text.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(text);
        }
    }
    Ok(out)
}

/// Full transcript operation: probe, select a caption track, fetch it,
/// flatten it. Blocks; run under `spawn_blocking` from async code.
pub fn fetch_transcript(cfg: &MdpConfig, url: &str) -> Result<String, FetchError> {
    let info = metadata::probe_media(cfg, url)?;
    let track = select_track(&info).ok_or(FetchError::NoCaptions)?;
    let track_url = track.url.as_deref().ok_or(FetchError::NoCaptions)?;
    let (bytes, _) = http::get_bytes(track_url)?;
    flatten_json3(&bytes)
}
