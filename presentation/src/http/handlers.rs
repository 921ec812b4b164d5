//! Route handlers

use super::SharedState;
use super::error::ApiError;
use axum::Json;
use axum::extract::{Query, State};
use qa_domain::{AnswerSubmission, SessionData, SessionId};
use serde::Deserialize;
use serde_json::{Value, json};

pub const WELCOME_MESSAGE: &str = "Welcome to the QA Session API!";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct SessionQuery {
    pub session_id: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub async fn root() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    let sessions = state.service.session_count().await;
    Json(json!({ "status": "ok", "sessions": sessions }))
}

/// `GET /new_session`
pub async fn new_session(State(state): State<SharedState>) -> Json<SessionData> {
    Json(state.service.create_session().await)
}

/// `GET /qa?session_id=<id>`: never 404s, unknown ids come back with a new id.
pub async fn get_questions(
    State(state): State<SharedState>,
    Query(query): Query<SessionQuery>,
) -> Json<SessionData> {
    let requested = SessionId::from(query.session_id);
    Json(state.service.fetch_session(&requested).await)
}

/// `POST /submit_answers`
pub async fn submit_answers(
    State(state): State<SharedState>,
    Json(submission): Json<AnswerSubmission>,
) -> Result<Json<SessionData>, ApiError> {
    let session = state.service.submit_answers(submission).await?;
    Ok(Json(session))
}
