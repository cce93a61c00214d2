use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pondlink_shortener::ShortenerError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Missing link")]
    MissingLink,
    #[error("stored link is not a valid redirect target: {0}")]
    InvalidRedirect(String),
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidJson | AppError::MissingLink => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::InvalidRedirect(_) => {
                error!(error = %self, "cannot redirect");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Shortener(source) => match source {
                ShortenerError::InvalidLink(_) => (StatusCode::BAD_REQUEST, "Invalid link".into()),
                ShortenerError::CapacityExceeded { .. } => {
                    (StatusCode::SERVICE_UNAVAILABLE, "Server is full".into())
                }
                ShortenerError::InvalidToken(source) => (StatusCode::BAD_REQUEST, source.to_string()),
                ShortenerError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found".into()),
                ShortenerError::Storage(source) => {
                    error!(error = %source, "storage failure");
                    (StatusCode::INTERNAL_SERVER_ERROR, source.to_string())
                }
            },
        };

        (status, message).into_response()
    }
}
