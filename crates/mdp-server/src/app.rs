//! Router assembly and shared state.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use mdp_core::config::MdpConfig;

use crate::handlers;

/// Shared state injected into every handler. Requests share nothing
/// mutable; the config is immutable for the server's lifetime.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<MdpConfig>,
}

/// Builds the API router. Route paths mirror the service's historical
/// endpoints so existing callers keep working.
pub fn build_router(cfg: MdpConfig) -> Router {
    let state = AppState { cfg: Arc::new(cfg) };
    Router::new()
        .route("/download_video", get(handlers::download_video))
        .route("/download_audio", get(handlers::download_audio))
        .route("/download_thumbnail", get(handlers::download_thumbnail))
        .route("/get_transcript", get(handlers::get_transcript))
        .route("/download_insta_video", get(handlers::download_insta_video))
        .route("/download_tiktok_video", get(handlers::download_tiktok_video))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}
