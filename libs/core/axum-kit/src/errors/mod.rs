pub mod handlers;

use crate::shape::ShapeError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Message returned for any unclassified failure. Internal detail is
/// logged server-side and never echoed to the client.
const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Standard error response structure.
///
/// Returned for every error response:
/// - `error`: machine-readable error identifier (e.g. "BadRequest")
/// - `message`: human-readable error message
/// - `details`: optional structured details (e.g. field violations)
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "BadRequest",
///   "message": "Request validation failed",
///   "details": [{"field": "name", "code": "length", "message": "..."}]
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g. validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Every failure surfaced during request handling is expressed as (or
/// converted into) an `AppError`; its `IntoResponse` impl is the single
/// terminal exit point that classifies the failure, logs it, and
/// produces exactly one response.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Shape validation error: {0}")]
    Shape(#[from] ShapeError),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

/// Classify an error into HTTP response components.
///
/// Validation failures map to a client error carrying the violation
/// list; anything unclassified maps to an opaque server error. Logging
/// happens here so classification and operator visibility stay in one
/// place.
fn classify(error: AppError) -> (StatusCode, &'static str, String, Option<serde_json::Value>) {
    match error {
        AppError::Shape(e) => {
            tracing::info!(fields = ?e.fields(), "Shape validation failed");
            (
                StatusCode::BAD_REQUEST,
                "BadRequest",
                "Request validation failed".to_string(),
                Some(e.to_details()),
            )
        }
        AppError::JsonExtractorRejection(e) => {
            tracing::info!("JSON extraction error: {:?}", e);
            (e.status(), "BadRequest", e.body_text(), None)
        }
        AppError::BadRequest(msg) => {
            tracing::info!("Bad request: {}", msg);
            (StatusCode::BAD_REQUEST, "BadRequest", msg, None)
        }
        AppError::NotFound(msg) => {
            tracing::info!("Not found: {}", msg);
            (StatusCode::NOT_FOUND, "NotFound", msg, None)
        }
        AppError::Internal(msg) => {
            tracing::error!("Internal server error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalServerError",
                INTERNAL_ERROR_MESSAGE.to_string(),
                None,
            )
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, details) = classify(self);

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn response_json(response: Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_shape_error_maps_to_400_with_violations() {
        let mut shape = ShapeError::new();
        shape.push("name", "length", "must be 1-120 characters");

        let (status, body) = response_json(AppError::from(shape).into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BadRequest");
        assert_eq!(body["details"][0]["field"], "name");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let (status, body) =
            response_json(AppError::NotFound("Item abc not found".to_string()).into_response())
                .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NotFound");
        assert_eq!(body["message"], "Item abc not found");
    }

    #[tokio::test]
    async fn test_internal_error_is_opaque() {
        let (status, body) = response_json(
            AppError::Internal("connection refused to 10.0.0.3".to_string()).into_response(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "InternalServerError");
        // Internal detail must not leak to the client
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let (status, body) =
            response_json(AppError::BadRequest("unsupported filter".to_string()).into_response())
                .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "unsupported filter");
    }
}
