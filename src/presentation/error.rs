// API error type rendered as a JSON error body
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown sort field {0:?}, expected views, avg_time or bounce")]
    UnknownSortField(String),

    #[error("unknown format {0:?}, expected json or text")]
    UnknownFormat(String),

    #[error("rendering failed: {0}")]
    Render(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::UnknownSortField(_) | ApiError::UnknownFormat(_) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
            ApiError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
