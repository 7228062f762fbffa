//! Inbound HTTP boundary
//!
//! One endpoint triggers a full session synchronously; a health route rounds
//! out the surface. Errors surface uniformly as 500 with the error text as
//! `detail`.

use crate::error::AppError;
use crate::ports::rng::EntropyRng;
use crate::roundtable::{RoundtableService, SessionOutcome, DEFAULT_MEETING_QUESTION};
use axum::extract::{Json, State};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Application state shared across handlers
pub struct AppState {
    pub roundtable: RoundtableService,
}

/// Body of the roundtable trigger; the question is optional
#[derive(Debug, Default, Deserialize)]
pub struct AgentChatRequest {
    #[serde(default)]
    pub question: Option<String>,
}

impl AgentChatRequest {
    /// Absent or blank questions fall back to the default strategic prompt
    pub fn question_or_default(&self) -> &str {
        match self.question.as_deref() {
            Some(q) if !q.trim().is_empty() => q,
            _ => DEFAULT_MEETING_QUESTION,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/agent-chat", post(agent_chat_handler))
        .with_state(state)
}

/// Bind and serve until ctrl-c
pub async fn serve(state: Arc<AppState>, bind_addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind_addr).await?;
    log::info!("Listening on {}", bind_addr);

    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn agent_chat_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AgentChatRequest>,
) -> Result<Json<SessionOutcome>, AppError> {
    let question = payload.question_or_default().to_string();
    let mut rng = EntropyRng::new();
    let outcome = state.roundtable.run_session(&question, &mut rng).await?;
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_blank_question_falls_back_to_default() {
        let empty = AgentChatRequest { question: None };
        assert_eq!(empty.question_or_default(), DEFAULT_MEETING_QUESTION);

        let blank = AgentChatRequest {
            question: Some("   ".to_string()),
        };
        assert_eq!(blank.question_or_default(), DEFAULT_MEETING_QUESTION);

        let explicit = AgentChatRequest {
            question: Some("which segments?".to_string()),
        };
        assert_eq!(explicit.question_or_default(), "which segments?");
    }

    #[test]
    fn test_request_deserializes_from_empty_object() {
        let request: AgentChatRequest = serde_json::from_str("{}").unwrap();
        assert!(request.question.is_none());
    }

    #[test]
    fn test_errors_map_to_server_error_with_detail() {
        let response =
            AppError::Completion("quota exceeded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
