//! HTTP routes and middleware

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{Recommender, Transcriber};

use super::handlers::{health_handler, predict_handler, voice_handler};
use super::state::AppState;

/// Largest accepted upload; matches the upstream transcription limit (25 MiB)
pub const MAX_AUDIO_BYTES: usize = 25 * 1024 * 1024;

pub fn create_router<T, R>(state: AppState<T, R>) -> Router
where
    T: Transcriber + 'static,
    R: Recommender + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/predict", post(predict_handler::<T, R>))
        .route(
            "/voice",
            post(voice_handler::<T, R>).layer(DefaultBodyLimit::max(MAX_AUDIO_BYTES)),
        )
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
