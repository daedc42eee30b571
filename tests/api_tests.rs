//! HTTP surface tests driven through the router with recording adapters

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use moodcart::application::ports::{
    RecommendationError, Recommender, Transcriber, TranscriptionError,
};
use moodcart::application::MoodPipeline;
use moodcart::domain::recommendation::Utterance;
use moodcart::domain::transcription::AudioData;
use moodcart::server::{create_router, AppState, MAX_AUDIO_BYTES};

type CallLog = Arc<Mutex<Vec<String>>>;

struct RecordingTranscriber {
    log: CallLog,
    result: Result<String, TranscriptionError>,
}

#[async_trait]
impl Transcriber for RecordingTranscriber {
    async fn transcribe(&self, audio: &AudioData) -> Result<String, TranscriptionError> {
        self.log.lock().unwrap().push(format!(
            "transcribe:{}:{}",
            audio.mime_type(),
            String::from_utf8_lossy(audio.data())
        ));
        self.result.clone()
    }
}

struct RecordingRecommender {
    log: CallLog,
    result: Result<String, RecommendationError>,
}

#[async_trait]
impl Recommender for RecordingRecommender {
    async fn recommend(&self, utterance: &Utterance) -> Result<String, RecommendationError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("recommend:{}", utterance.as_str()));
        self.result.clone()
    }
}

const ANSWER: &str = "{\"mood\": \"tired\", \"product\": \"Herbal tea\", \"reason\": \"Rest up.\"}";

fn app_with(
    transcript: Result<String, TranscriptionError>,
    answer: Result<String, RecommendationError>,
) -> (Router, CallLog) {
    let log = CallLog::default();
    let pipeline = MoodPipeline::new(
        RecordingTranscriber {
            log: log.clone(),
            result: transcript,
        },
        RecordingRecommender {
            log: log.clone(),
            result: answer,
        },
    );
    (create_router(AppState::new(pipeline)), log)
}

fn app() -> (Router, CallLog) {
    app_with(Ok("I had a long day".to_string()), Ok(ANSWER.to_string()))
}

fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

fn predict_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

const BOUNDARY: &str = "moodcart-test-boundary";

/// Build a multipart body from (field name, optional (file name, content type), bytes)
fn multipart_body(fields: &[(&str, Option<(&str, &str)>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file, data) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match file {
            Some((file_name, content_type)) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name, file_name, content_type
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn voice_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/voice")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, log) = app();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
    assert!(calls(&log).is_empty());
}

#[tokio::test]
async fn predict_forwards_exact_input_and_returns_answer_verbatim() {
    let (app, log) = app();
    let input = json!({ "user_input": "I'm exhausted after work" }).to_string();

    let (status, body) = send(app, predict_request(input)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": ANSWER }));
    assert_eq!(calls(&log), vec!["recommend:I'm exhausted after work"]);
}

#[tokio::test]
async fn predict_keeps_surrounding_whitespace() {
    let (app, log) = app();
    let input = json!({ "user_input": "  feeling blue \n" }).to_string();

    let (status, _) = send(app, predict_request(input)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(calls(&log), vec!["recommend:  feeling blue \n"]);
}

#[tokio::test]
async fn predict_rejects_empty_missing_and_malformed_input() {
    let bodies = [
        json!({ "user_input": "" }).to_string(),
        json!({ "user_input": "   " }).to_string(),
        json!({}).to_string(),
        json!({ "user_input": 42 }).to_string(),
        "{not json".to_string(),
    ];

    for raw in bodies {
        let (app, log) = app();
        let (status, body) = send(app, predict_request(raw.clone())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", raw);
        assert!(body["error"].is_string(), "body: {}", raw);
        assert!(calls(&log).is_empty(), "adapter called for {}", raw);
    }
}

#[tokio::test]
async fn predict_without_content_type_is_bad_request() {
    let (app, log) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .body(Body::from(json!({ "user_input": "hi" }).to_string()))
        .unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(calls(&log).is_empty());
}

#[tokio::test]
async fn predict_is_never_cached() {
    let (app, log) = app();
    let input = json!({ "user_input": "same again" }).to_string();

    let (first, _) = send(app.clone(), predict_request(input.clone())).await;
    let (second, _) = send(app, predict_request(input)).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(calls(&log), vec!["recommend:same again", "recommend:same again"]);
}

#[tokio::test]
async fn predict_upstream_failure_is_bad_gateway_without_detail() {
    let (app, log) = app_with(
        Ok(String::new()),
        Err(RecommendationError::ApiError("secret upstream detail".to_string())),
    );
    let input = json!({ "user_input": "anything" }).to_string();

    let (status, body) = send(app, predict_request(input)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "error": "AI processing failed" }));
    assert_eq!(calls(&log).len(), 1);
}

#[tokio::test]
async fn voice_transcribes_then_recommends_from_transcript() {
    let (app, log) = app();
    let body = multipart_body(&[("audio", Some(("clip.webm", "audio/webm")), b"RIFFDATA")]);

    let (status, body) = send(app, voice_request(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": ANSWER }));
    assert_eq!(
        calls(&log),
        vec!["transcribe:audio/webm:RIFFDATA", "recommend:I had a long day"]
    );
}

#[tokio::test]
async fn voice_ignores_other_fields() {
    let (app, log) = app();
    let body = multipart_body(&[
        ("note", None, b"hello"),
        ("audio", Some(("clip.mp3", "application/octet-stream")), b"ID3"),
    ]);

    let (status, _) = send(app, voice_request(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(calls(&log)[0], "transcribe:audio/mpeg:ID3");
}

#[tokio::test]
async fn voice_oversize_upload_is_rejected_without_calls() {
    let (app, log) = app();
    let audio = vec![0u8; MAX_AUDIO_BYTES + 1];
    let body = multipart_body(&[("audio", Some(("clip.webm", "audio/webm")), audio.as_slice())]);

    let (status, body) = send(app, voice_request(body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].is_string());
    assert!(calls(&log).is_empty());
}

#[tokio::test]
async fn voice_upload_above_default_body_limit_is_accepted() {
    let (app, log) = app();
    let audio = vec![b'a'; 3 * 1024 * 1024];
    let body = multipart_body(&[("audio", Some(("clip.webm", "audio/webm")), audio.as_slice())]);

    let (status, body) = send(app, voice_request(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": ANSWER }));
    let calls = calls(&log);
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].len(), "transcribe:audio/webm:".len() + audio.len());
}

#[tokio::test]
async fn voice_without_audio_field_calls_nothing() {
    let (app, log) = app();
    let body = multipart_body(&[("note", None, b"hello")]);

    let (status, body) = send(app, voice_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No audio received" }));
    assert!(calls(&log).is_empty());
}

#[tokio::test]
async fn voice_with_empty_upload_calls_nothing() {
    let (app, log) = app();
    let body = multipart_body(&[("audio", Some(("clip.webm", "audio/webm")), b"")]);

    let (status, body) = send(app, voice_request(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No audio received" }));
    assert!(calls(&log).is_empty());
}

#[tokio::test]
async fn voice_with_non_multipart_body_calls_nothing() {
    let (app, log) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/voice")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No audio received" }));
    assert!(calls(&log).is_empty());
}

#[tokio::test]
async fn voice_transcription_failure_stops_before_recommender() {
    let (app, log) = app_with(Err(TranscriptionError::RateLimited), Ok(ANSWER.to_string()));
    let body = multipart_body(&[("audio", Some(("clip.ogg", "audio/ogg")), b"OggS")]);

    let (status, body) = send(app, voice_request(body)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "error": "Voice processing failed" }));
    assert_eq!(calls(&log), vec!["transcribe:audio/ogg:OggS"]);
}

#[tokio::test]
async fn voice_silent_transcript_is_unprocessable() {
    let (app, log) = app_with(Ok("  \n".to_string()), Ok(ANSWER.to_string()));
    let body = multipart_body(&[("audio", Some(("clip.wav", "audio/wav")), b"RIFF")]);

    let (status, body) = send(app, voice_request(body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
    assert_eq!(calls(&log).len(), 1);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (app, _) = app();
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/predict")
        .header(header::ORIGIN, "https://builder.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
