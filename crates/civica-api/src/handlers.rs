//! Route handlers for the Civica API.
//!
//! Each interaction endpoint runs one full assistant cycle before
//! returning; the host never observes a half-appended turn pair.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use civica_chat::RenderedTurn;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request / response bodies
// =============================================================================

/// Response for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub turns: usize,
    pub uptime_secs: u64,
}

/// Request for `POST /chat`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response for `POST /chat`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub transcript_len: usize,
}

/// Response for `POST /voice`.
#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceResponse {
    /// What the speech collaborator heard; empty when nothing was
    /// recognized.
    pub transcript: String,
    /// The bot's answer, absent when the transcript was empty.
    pub answer: Option<String>,
}

/// Response for `GET /transcript`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub turns: Vec<RenderedTurn>,
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /health` - liveness plus basic session stats.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        turns: state.assistant.turn_count(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// `POST /chat` - handle one typed question.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let answer = state.assistant.handle_message(&request.message).await?;
    Ok(Json(ChatResponse {
        answer,
        transcript_len: state.assistant.turn_count(),
    }))
}

/// `POST /voice` - capture one round of speech and handle its transcript.
pub async fn voice(State(state): State<AppState>) -> Result<Json<VoiceResponse>, ApiError> {
    let transcript = state.speech.capture().await;
    let answer = state.assistant.handle_transcript(&transcript).await?;
    if answer.is_none() {
        tracing::debug!("Voice capture produced no usable transcript");
    }
    Ok(Json(VoiceResponse { transcript, answer }))
}

/// `GET /transcript` - the rendered conversation in display order.
pub async fn transcript(
    State(state): State<AppState>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let turns = state.assistant.rendered()?;
    Ok(Json(TranscriptResponse { turns }))
}

/// `POST /transcript/clear` - drop the session history.
pub async fn clear(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.assistant.clear()?;
    Ok(StatusCode::NO_CONTENT)
}
