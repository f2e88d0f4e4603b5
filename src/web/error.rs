use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request-scoped failures of the HTTP surface.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("task not found: {0}")]
    TaskNotFound(i64),

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match self {
            WebError::TaskNotFound(_) => StatusCode::NOT_FOUND,
            WebError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
