/// Error types for Recipe Service
///
/// Every handler returns [`Result`]; the error is rendered as a JSON body
/// `{"error": ..., "status": ...}` with the matching HTTP status code.
use crate::db::StoreError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for recipe-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// The document store was not configured at startup
    #[error("Database not configured")]
    NotConfigured,

    /// Payload or query parameters failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Path identifier is not a well-formed store identifier
    #[error("Invalid recipe id")]
    InvalidId,

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Store operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn recipe_not_found() -> Self {
        AppError::NotFound("Recipe not found".to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotConfigured | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidId => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_msg = self.to_string();

        HttpResponse::build(status).json(serde_json::json!({
            "error": error_msg,
            "status": status.as_u16(),
        }))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "document store operation failed");
        AppError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            AppError::NotConfigured.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::recipe_not_found().status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("title".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn not_configured_message_is_fixed() {
        assert_eq!(AppError::NotConfigured.to_string(), "Database not configured");
        assert_eq!(AppError::InvalidId.to_string(), "Invalid recipe id");
        assert_eq!(AppError::recipe_not_found().to_string(), "Recipe not found");
    }
}
