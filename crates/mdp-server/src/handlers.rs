//! Route handlers.
//!
//! Each handler validates its input before any resource allocation, runs
//! the blocking engine call on the blocking pool, and maps failures to
//! JSON error responses. Requests are independent; there is no shared
//! mutable state.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::task;

use mdp_core::error::FetchError;
use mdp_core::{fetch, format, metadata, probe, transcript};

use crate::app::AppState;
use crate::error::ApiError;
use crate::stream;

#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    url: Option<String>,
}

/// Rejects missing/blank `url` before anything touches the filesystem.
fn require_url(query: &UrlQuery) -> Result<&str, ApiError> {
    match query.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => Ok(url),
        None => Err(ApiError::bad_request("Missing 'url' parameter")),
    }
}

fn log_failure(route: &'static str) -> impl FnOnce(FetchError) -> ApiError {
    move |err| {
        tracing::warn!(route, error = %err, "request failed");
        ApiError::from(err)
    }
}

async fn download_with_format(
    state: AppState,
    query: UrlQuery,
    route: &'static str,
    audio_only: bool,
) -> Result<Response, ApiError> {
    let url = require_url(&query)?.to_string();
    let cfg = Arc::clone(&state.cfg);

    let fetched = task::spawn_blocking(move || {
        let spec = if audio_only {
            format::negotiate_audio()
        } else {
            format::negotiate_video(probe::ffmpeg_available())
        };
        fetch::fetch_media(&cfg, &url, &spec)
    })
    .await
    .map_err(ApiError::from_join)?
    .map_err(log_failure(route))?;

    stream::serve_artifact(fetched).await
}

pub async fn download_video(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Response, ApiError> {
    download_with_format(state, query, "download_video", false).await
}

pub async fn download_audio(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Response, ApiError> {
    download_with_format(state, query, "download_audio", true).await
}

pub async fn download_insta_video(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Response, ApiError> {
    download_with_format(state, query, "download_insta_video", false).await
}

pub async fn download_tiktok_video(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Response, ApiError> {
    download_with_format(state, query, "download_tiktok_video", false).await
}

pub async fn download_thumbnail(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Response, ApiError> {
    let url = require_url(&query)?.to_string();
    let cfg = Arc::clone(&state.cfg);

    let thumb = task::spawn_blocking(move || metadata::fetch_thumbnail(&cfg, &url))
        .await
        .map_err(ApiError::from_join)?
        .map_err(log_failure("download_thumbnail"))?;

    let headers = [
        (header::CONTENT_TYPE, thumb.media_type),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", thumb.filename),
        ),
    ];
    Ok((headers, thumb.bytes).into_response())
}

pub async fn get_transcript(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let url = require_url(&query)?.to_string();
    if transcript::video_id(&url).is_none() {
        return Err(ApiError::bad_request(
            "Could not extract video ID from the provided URL.",
        ));
    }
    let cfg = Arc::clone(&state.cfg);

    let text = task::spawn_blocking(move || transcript::fetch_transcript(&cfg, &url))
        .await
        .map_err(ApiError::from_join)?
        .map_err(log_failure("get_transcript"))?;

    Ok(Json(json!({ "transcript": text })))
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub ytdlp: bool,
    pub ffmpeg: bool,
}

/// Liveness plus the capability-probe results, for operators.
pub async fn healthz(State(state): State<AppState>) -> Json<Health> {
    let cfg = Arc::clone(&state.cfg);
    let (ytdlp, ffmpeg) = task::spawn_blocking(move || {
        (probe::resolve_ytdlp(&cfg).is_some(), probe::ffmpeg_available())
    })
    .await
    .unwrap_or((false, false));

    Json(Health {
        status: "ok",
        ytdlp,
        ffmpeg,
    })
}
