//! Application error type and its HTTP mapping.
//!
//! The wire contract has two body shapes:
//!
//! - `{"message": "..."}` for not-found outcomes (404)
//! - `{"error": "..."}` for everything that went wrong (400, 500)
//!
//! Storage failures never leak details to the client. Handlers attach the
//! route-specific message with [`ResultExt::or_internal`].

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Body returned for 404 responses.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Body returned for 4xx/5xx failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// No entity matched. Rendered as `404 {"message"}`.
    #[error("{message}")]
    NotFound { message: String },

    /// The request could not be decoded. Rendered as `400 {"error"}`.
    #[error("{message}")]
    BadRequest { message: String },

    /// A storage failure with the route's client-facing message attached.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Option<sqlx::Error>,
    },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } | AppError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(format!(
            "Invalid path parameter: {}",
            rejection.body_text()
        ))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::NotFound { message } => {
                (status, Json(MessageBody { message })).into_response()
            }
            AppError::BadRequest { message } | AppError::Internal { message, .. } => {
                (status, Json(ErrorBody { error: message })).into_response()
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "Unhandled database error");
                (
                    status,
                    Json(ErrorBody {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Attaches a client-facing message to storage failures.
pub trait ResultExt<T> {
    /// Rewrites [`AppError::Database`] into [`AppError::Internal`] carrying
    /// `message`. Other variants pass through unchanged.
    fn or_internal(self, message: &str) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for Result<T, AppError> {
    fn or_internal(self, message: &str) -> Result<T, AppError> {
        self.map_err(|err| match err {
            AppError::Database(source) => AppError::Internal {
                message: message.to_string(),
                source: Some(source),
            },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_renders_message_body() {
        let response = AppError::not_found("Book not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Book not found");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let response = AppError::from(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_or_internal_attaches_route_message() {
        let result: Result<(), AppError> = Err(AppError::Database(sqlx::Error::PoolClosed));
        let err = result.or_internal("Failed to add book.").unwrap_err();

        assert!(matches!(err, AppError::Internal { source: Some(_), .. }));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to add book.");
    }

    #[test]
    fn test_or_internal_keeps_not_found() {
        let result: Result<(), AppError> = Err(AppError::not_found("Book does not exist"));
        let err = result.or_internal("Failed to update book.").unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
