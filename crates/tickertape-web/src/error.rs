use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tickertape_core::FetchError;

/// Start-up failures that stop the server.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("invalid bind address '{value}'")]
    InvalidBindAddress { value: String },

    #[error("page templates failed to compile: {0}")]
    Template(#[from] tera::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WebError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidBindAddress { .. } => 2,
            Self::Template(_) => 3,
            Self::Io(_) => 10,
        }
    }
}

/// Proxy failure response. Every fetch error kind maps to 500.
#[derive(Debug)]
pub struct ApiError(pub FetchError);

impl From<FetchError> for ApiError {
    fn from(error: FetchError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.0.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Page rendering failure. Reported as a bare 500; details go to the log.
#[derive(Debug)]
pub struct PageError(pub tera::Error);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "page rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "page rendering failed").into_response()
    }
}
