/// Error types for the roundtable service
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion service error: {0}")]
    Completion(String),

    #[error("Required reference document not found at {}", .0.display())]
    MissingReference(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Convert AppError to an HTTP response at the axum boundary
///
/// Every failure surfaces uniformly as a server error with the error text
/// as `detail`; the only user input (the meeting question) cannot be invalid.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        log::error!("Session failed: {}", detail);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": detail })),
        )
            .into_response()
    }
}
