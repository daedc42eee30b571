//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::PipelineError;
use crate::domain::error::ErrorKind;

/// Body of every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match &err {
            PipelineError::InvalidInput(_) => {
                ApiError::bad_request("user_input must be a non-empty string")
            }
            PipelineError::NoAudioProvided => ApiError::bad_request("No audio received"),
            PipelineError::NoSpeechDetected => {
                ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            PipelineError::Transcription(inner) => {
                if inner.kind() == ErrorKind::NoAudioProvided {
                    return ApiError::bad_request("No audio received");
                }
                tracing::error!(error = %inner, "Voice processing failed");
                ApiError::bad_gateway("Voice processing failed")
            }
            PipelineError::Recommendation(inner) => {
                tracing::error!(error = %inner, "AI processing failed");
                ApiError::bad_gateway("AI processing failed")
            }
        }
    }
}
