//! `/api/chat`: AI-backed chat reply.
//!
//! The handler is mounted for every method so clients get the JSON error
//! shape instead of an empty 405. `OPTIONS` never reaches it: the CORS layer
//! answers preflight requests (see [`super::chat_cors`]).
//!
//! Malformed requests are rejected with 400: invalid JSON, an empty body, and
//! a missing or non-string `message`. Only upstream LLM failures produce 500
//! `"Server error: ..."`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::{Value, json};
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use crate::llm::types::LlmError;
use crate::services::reply;
use crate::state::AppState;

/// Failures returned to the caller as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ChatApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid JSON body")]
    InvalidJson,
    #[error("Message is required")]
    MessageRequired,
    #[error("Server error: {0}")]
    Upstream(#[from] LlmError),
}

impl ChatApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidJson | Self::MessageRequired => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// `ANY /api/chat`: `POST {"message": "..."}` returns `{"response": "..."}`.
pub async fn handle_chat(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!("chat", %request_id);
    match respond(&state, &method, &body).instrument(span).await {
        Ok(text) => Json(json!({ "response": text })).into_response(),
        Err(e) => {
            if matches!(e, ChatApiError::Upstream(_)) {
                warn!(%request_id, error = %e, "chat reply failed");
            }
            e.into_response()
        }
    }
}

async fn respond(state: &AppState, method: &Method, body: &[u8]) -> Result<String, ChatApiError> {
    if method != Method::POST {
        return Err(ChatApiError::MethodNotAllowed);
    }
    let message = parse_message(body)?;
    let text = reply::generate_reply(state.llm.as_deref(), &message).await?;
    Ok(text)
}

/// Extract a non-empty `message` string. An empty body reads as `{}`.
pub(crate) fn parse_message(body: &[u8]) -> Result<String, ChatApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ChatApiError::MessageRequired);
    }
    let value: Value = serde_json::from_slice(body).map_err(|_| ChatApiError::InvalidJson)?;
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
        .ok_or(ChatApiError::MessageRequired)
}
