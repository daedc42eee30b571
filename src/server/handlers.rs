//! Route handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Recommender, Transcriber};
use crate::application::PipelineError;
use crate::domain::transcription::{AudioData, AudioMimeType};

use super::error::ApiError;
use super::state::AppState;

/// Multipart field carrying the recording
pub const AUDIO_FIELD: &str = "audio";

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub user_input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `POST /predict` with `{ "user_input": "..." }`
#[tracing::instrument(skip_all)]
pub async fn predict_handler<T, R>(
    State(state): State<AppState<T, R>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, ApiError>
where
    T: Transcriber + 'static,
    R: Recommender + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected predict body");
        ApiError::bad_request("user_input must be a non-empty string")
    })?;

    let user_input = request.user_input.unwrap_or_default();
    let answer = state.pipeline.recommend_text(&user_input).await?;

    Ok(Json(AnswerResponse { answer }))
}

/// `POST /voice` with a multipart `audio` file field
#[tracing::instrument(skip_all)]
pub async fn voice_handler<T, R>(
    State(state): State<AppState<T, R>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnswerResponse>, ApiError>
where
    T: Transcriber + 'static,
    R: Recommender + 'static,
{
    let multipart = multipart.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Voice request is not multipart");
        ApiError::from(PipelineError::NoAudioProvided)
    })?;

    let audio = read_audio_field(multipart).await?;
    let answer = state.pipeline.recommend_voice(audio).await?;

    Ok(Json(AnswerResponse { answer }))
}

/// Pull the `audio` field out of the form; other fields are ignored.
async fn read_audio_field(mut multipart: Multipart) -> Result<Option<AudioData>, ApiError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return Err(ApiError::new(e.status(), e.body_text()));
            }
        };

        if field.name() != Some(AUDIO_FIELD) {
            tracing::debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        let mime_type = field
            .content_type()
            .and_then(AudioMimeType::from_mime)
            .or_else(|| field.file_name().and_then(AudioMimeType::from_file_name))
            .unwrap_or_default();

        let data = field.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read audio bytes");
            ApiError::new(e.status(), e.body_text())
        })?;

        return Ok(Some(AudioData::new(data.to_vec(), mime_type)));
    }
}
