//! Shape validation primitives.
//!
//! Validation is expressed as explicit functions from untyped JSON to a
//! tagged result: either the well-typed value, or a [`ShapeError`]
//! carrying every violated field constraint. Domain crates implement
//! [`FromShape`] for their input shapes; the [`ShapedJson`] extractor
//! applies it at the HTTP boundary.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, FromRequestParts, Json, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    /// Name of the offending input field
    pub field: String,
    /// Machine-readable violation code (e.g. "length", "uuid")
    pub code: String,
    /// Human-readable description of the constraint
    pub message: String,
}

/// Validation failure carrying the full list of field violations.
///
/// Validators accumulate into a `ShapeError` rather than failing on the
/// first bad field, so a client sees every problem in one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeError {
    pub violations: Vec<FieldViolation>,
}

impl ShapeError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation against `field`.
    pub fn push(&mut self, field: &str, code: &str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            code: code.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Names of all violated fields, in insertion order.
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    /// Finish a validation pass: `Ok(value)` if nothing was recorded,
    /// otherwise the accumulated violations.
    pub fn into_result<T>(self, value: T) -> Result<T, ShapeError> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    /// Structured representation for the error response `details` slot.
    pub fn to_details(&self) -> serde_json::Value {
        serde_json::to_value(&self.violations).unwrap_or(serde_json::Value::Null)
    }
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = self.fields().join(", ");
        write!(
            f,
            "shape validation failed on {} field(s): {}",
            self.violations.len(),
            fields
        )
    }
}

impl std::error::Error for ShapeError {}

/// Conversion from arbitrary untyped JSON input into a validated shape.
pub trait FromShape: Sized {
    fn from_value(value: &serde_json::Value) -> Result<Self, ShapeError>;
}

/// JSON extractor with shape validation.
///
/// Extracts the body as untyped JSON, then runs the target type's
/// [`FromShape`] validation. Both failure modes (malformed JSON,
/// violated constraints) are routed through [`AppError`] so every
/// request failure exits through the same classification point.
///
/// Body parsing is per-extractor: this covers JSON bodies only. An
/// endpoint consuming URL-encoded form bodies would use axum's `Form`
/// extractor and run the same [`FromShape`] validation on the result.
///
/// # Example
/// ```ignore
/// async fn create_item(ShapedJson(input): ShapedJson<CreateItem>) { /* ... */ }
/// ```
pub struct ShapedJson<T>(pub T);

impl<T, S> FromRequest<S> for ShapedJson<T>
where
    T: FromShape,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        let data = T::from_value(&value).map_err(|e| AppError::from(e).into_response())?;

        Ok(ShapedJson(data))
    }
}

/// Path extractor for UUID identifiers.
///
/// Rejects malformed identifiers with the same violation-list shape as
/// body validation, naming the `id` field, instead of axum's default
/// path-rejection text.
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        let id = raw.parse::<Uuid>().map_err(|_| {
            let mut errors = ShapeError::new();
            errors.push("id", "uuid", "must be a valid UUID");
            AppError::from(errors).into_response()
        })?;

        Ok(UuidPath(id))
    }
}
