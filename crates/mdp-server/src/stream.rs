//! Streamed artifact responses with deferred scratch cleanup.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::body::{Body, Bytes};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures::Stream;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use mdp_core::fetch::FetchedMedia;

use crate::error::ApiError;

/// File stream that owns the artifact's scratch directory.
///
/// The directory is deleted when this stream is dropped, i.e. after the
/// response body has been fully written or the client has gone away —
/// never before the handoff completes.
struct ArtifactStream {
    inner: ReaderStream<File>,
    _media: FetchedMedia,
}

impl Stream for ArtifactStream {
    type Item = io::Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

/// Builds the attachment response for a fetched artifact.
pub async fn serve_artifact(media: FetchedMedia) -> Result<Response, ApiError> {
    let file = File::open(&media.path).await.map_err(|err| {
        tracing::error!(path = %media.path.display(), error = %err, "artifact vanished before streaming");
        ApiError::internal("downloaded file disappeared before it could be served")
    })?;

    let headers = [
        (header::CONTENT_TYPE, media.media_type.clone()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", media.filename),
        ),
    ];
    let body = Body::from_stream(ArtifactStream {
        inner: ReaderStream::new(file),
        _media: media,
    });
    Ok((headers, body).into_response())
}
