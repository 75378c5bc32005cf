//! Error types for the Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Wrap a catalog error with the action that failed, preserving its kind.
    /// Produces messages like "Failed to add book. please provide the book name".
    pub fn catalog(action: &str, err: CatalogError) -> Self {
        let message = format!("{action}. {err}");
        match err {
            CatalogError::NotFound(_) => AppError::NotFound(message),
            CatalogError::MissingName | CatalogError::PageOverflow { .. } => {
                AppError::Validation(message)
            }
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => AppError::NotFound(err.to_string()),
            CatalogError::MissingName | CatalogError::PageOverflow { .. } => {
                AppError::Validation(err.to_string())
            }
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// "fail" for caller errors, "error" for internal faults
    pub status: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "fail", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "fail", msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            status: status.to_string(),
            message,
        });

        (status_code, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
