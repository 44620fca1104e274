//! Integration tests for the Civica API.
//!
//! Drives the full router with `tower::ServiceExt::oneshot` against an
//! in-memory state (mock lookup + mock speech), covering happy paths and
//! error paths for every endpoint.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use civica_api::handlers::{
    ChatResponse, HealthResponse, TranscriptResponse, VoiceResponse,
};
use civica_api::{create_router, AppState};
use civica_chat::Assistant;
use civica_core::config::CivicaConfig;
use civica_lookup::{LookupResult, MockLookupService};
use civica_speech::MockSpeechService;

// =============================================================================
// Helpers
// =============================================================================

/// Build a state around the given mocks.
fn make_state(lookup: Arc<MockLookupService>, speech: MockSpeechService) -> AppState {
    let assistant = Assistant::new(&CivicaConfig::default(), lookup);
    AppState::new(assistant, Arc::new(speech))
}

/// Default state: summary lookups, silent microphone.
fn default_state() -> AppState {
    make_state(
        Arc::new(MockLookupService::new(LookupResult::Summary(
            "A smart city uses sensors.".to_string(),
        ))),
        MockSpeechService::unrecognized(),
    )
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

fn chat_json(message: &str) -> String {
    serde_json::to_string(&serde_json::json!({ "message": message })).unwrap()
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

// =============================================================================
// /health
// =============================================================================

#[tokio::test]
async fn test_health_happy_path() {
    let app = create_router(default_state());
    let resp = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.turns, 0);
}

#[tokio::test]
async fn test_health_reports_turn_count() {
    let state = default_state();
    let app = create_router(state.clone());

    app.clone()
        .oneshot(post_json("/chat", &chat_json("tell me about smart grids")))
        .await
        .unwrap();

    let resp = app.oneshot(get("/health")).await.unwrap();
    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.turns, 2);
}

// =============================================================================
// /chat
// =============================================================================

#[tokio::test]
async fn test_chat_happy_path() {
    let app = create_router(default_state());
    let resp = app
        .oneshot(post_json("/chat", &chat_json("What is a smart city?")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let chat: ChatResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(chat.answer, "A smart city uses sensors.");
    assert_eq!(chat.transcript_len, 2);
}

#[tokio::test]
async fn test_chat_empty_message_is_bad_request() {
    let app = create_router(default_state());
    let resp = app
        .oneshot(post_json("/chat", &chat_json("   ")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_over_long_message_is_unprocessable() {
    let app = create_router(default_state());
    let long = "x".repeat(2001);
    let resp = app
        .oneshot(post_json("/chat", &chat_json(&long)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_chat_malformed_body_is_client_error() {
    let app = create_router(default_state());
    let resp = app
        .oneshot(post_json("/chat", "{ not json"))
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_chat_realtime_question_bypasses_lookup() {
    let lookup = Arc::new(MockLookupService::new(LookupResult::NotFound));
    let app = create_router(make_state(
        Arc::clone(&lookup),
        MockSpeechService::unrecognized(),
    ));

    let resp = app
        .oneshot(post_json("/chat", &chat_json("What is the air quality today?")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let chat: ChatResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(chat.answer.contains("Real-time data"));
    assert_eq!(lookup.lookup_calls(), 0);
}

#[tokio::test]
async fn test_chat_not_found_topic_names_it() {
    let app = create_router(make_state(
        Arc::new(MockLookupService::new(LookupResult::NotFound)),
        MockSpeechService::unrecognized(),
    ));

    let resp = app
        .oneshot(post_json("/chat", &chat_json("Xyzzyplex")))
        .await
        .unwrap();

    let chat: ChatResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(chat.answer.contains("Xyzzyplex"));
    assert!(chat.answer.contains("No encyclopedia page found"));
}

// =============================================================================
// /voice
// =============================================================================

#[tokio::test]
async fn test_voice_with_recognized_speech() {
    let app = create_router(make_state(
        Arc::new(MockLookupService::new(LookupResult::Summary(
            "Answer.".to_string(),
        ))),
        MockSpeechService::with_transcript("tell me about smart grids"),
    ));

    let resp = app.oneshot(post_empty("/voice")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let voice: VoiceResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(voice.transcript, "tell me about smart grids");
    assert_eq!(voice.answer.as_deref(), Some("Answer."));
}

#[tokio::test]
async fn test_voice_with_unrecognized_speech_appends_nothing() {
    let state = default_state();
    let app = create_router(state.clone());

    let resp = app.clone().oneshot(post_empty("/voice")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let voice: VoiceResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(voice.transcript, "");
    assert!(voice.answer.is_none());

    let resp = app.oneshot(get("/transcript")).await.unwrap();
    let transcript: TranscriptResponse =
        serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(transcript.turns.is_empty());
}

// =============================================================================
// /transcript + /transcript/clear
// =============================================================================

#[tokio::test]
async fn test_transcript_renders_turn_pairs_in_order() {
    let state = default_state();
    let app = create_router(state.clone());

    app.clone()
        .oneshot(post_json("/chat", &chat_json("first question")))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_json("/chat", &chat_json("second question")))
        .await
        .unwrap();

    let resp = app.oneshot(get("/transcript")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let transcript: TranscriptResponse =
        serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(transcript.turns.len(), 4);
    assert!(transcript.turns[0].is_user);
    assert_eq!(transcript.turns[0].text, "first question");
    assert!(!transcript.turns[1].is_user);
    assert!(transcript.turns[2].is_user);
    assert_eq!(transcript.turns[2].text, "second question");
    assert!(transcript.turns[0].key.starts_with("user_0_"));
    assert!(transcript.turns[3].key.starts_with("bot_3_"));
}

#[tokio::test]
async fn test_clear_empties_the_transcript() {
    let state = default_state();
    let app = create_router(state.clone());

    app.clone()
        .oneshot(post_json("/chat", &chat_json("a question")))
        .await
        .unwrap();

    let resp = app.clone().oneshot(post_empty("/transcript/clear")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.oneshot(get("/transcript")).await.unwrap();
    let transcript: TranscriptResponse =
        serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(transcript.turns.is_empty());
}

#[tokio::test]
async fn test_clear_on_empty_session_is_fine() {
    let app = create_router(default_state());
    let resp = app.oneshot(post_empty("/transcript/clear")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

// =============================================================================
// Routing basics
// =============================================================================

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_router(default_state());
    let resp = app.oneshot(get("/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app = create_router(default_state());
    let resp = app.oneshot(get("/chat")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
