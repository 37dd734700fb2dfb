//! Shape validation for item and pagination inputs.
//!
//! Pure functions from untyped input to a tagged result: the validated
//! value, or a [`ShapeError`] listing every violated field constraint.
//! Nothing here touches shared state, so validating the same input
//! twice yields identical results.

use axum_kit::shape::{FromShape, ShapeError};
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{
    CreateItem, DEFAULT_LIMIT, DEFAULT_PAGE, DESCRIPTION_MAX_LEN, Item, MAX_LIMIT, NAME_MAX_LEN,
    PageQuery, Pagination,
};

/// Validate the `name` field: required string of 1-120 characters.
fn check_name(value: &Value, errors: &mut ShapeError) -> Option<String> {
    match value.get("name") {
        None | Some(Value::Null) => {
            errors.push("name", "required", "is required");
            None
        }
        Some(Value::String(s)) => {
            let len = s.chars().count();
            if len < 1 || len > NAME_MAX_LEN {
                errors.push(
                    "name",
                    "length",
                    format!("must be between 1 and {} characters", NAME_MAX_LEN),
                );
                None
            } else {
                Some(s.clone())
            }
        }
        Some(_) => {
            errors.push("name", "type", "must be a string");
            None
        }
    }
}

/// Validate the optional `description` field: string of up to 500
/// characters. Absent always passes.
fn check_description(value: &Value, errors: &mut ShapeError) -> Option<String> {
    match value.get("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => {
            if s.chars().count() > DESCRIPTION_MAX_LEN {
                errors.push(
                    "description",
                    "length",
                    format!("must be at most {} characters", DESCRIPTION_MAX_LEN),
                );
                None
            } else {
                Some(s.clone())
            }
        }
        Some(_) => {
            errors.push("description", "type", "must be a string");
            None
        }
    }
}

/// Validate the optional `id` field: must parse as a UUID.
fn check_id(value: &Value, errors: &mut ShapeError) -> Option<Uuid> {
    match value.get("id") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => match s.parse::<Uuid>() {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push("id", "uuid", "must be a valid UUID");
                None
            }
        },
        Some(_) => {
            errors.push("id", "uuid", "must be a valid UUID");
            None
        }
    }
}

/// Validate the optional `createdAt` field: RFC 3339 timestamp.
fn check_created_at(value: &Value, errors: &mut ShapeError) -> Option<DateTime<Utc>> {
    match value.get("createdAt") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => match DateTime::parse_from_rfc3339(s) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(_) => {
                errors.push("createdAt", "datetime", "must be an RFC 3339 timestamp");
                None
            }
        },
        Some(_) => {
            errors.push("createdAt", "datetime", "must be an RFC 3339 timestamp");
            None
        }
    }
}

impl FromShape for Item {
    /// Validates the full entity shape, collecting every violation.
    fn from_value(value: &Value) -> Result<Self, ShapeError> {
        let mut errors = ShapeError::new();

        let id = check_id(value, &mut errors);
        let name = check_name(value, &mut errors);
        let description = check_description(value, &mut errors);
        let created_at = check_created_at(value, &mut errors);

        let item = Item {
            id,
            name: name.unwrap_or_default(),
            description,
            created_at,
        };
        errors.into_result(item)
    }
}

impl FromShape for CreateItem {
    /// Validates the client-suppliable subset of `Item`.
    ///
    /// `id` and `createdAt` keys in the raw input are dropped before
    /// validation; they are server-assigned and can never reach the
    /// validated output as client-controlled values.
    fn from_value(value: &Value) -> Result<Self, ShapeError> {
        let mut errors = ShapeError::new();

        let name = check_name(value, &mut errors);
        let description = check_description(value, &mut errors);

        let input = CreateItem {
            name: name.unwrap_or_default(),
            description,
        };
        errors.into_result(input)
    }
}

impl Pagination {
    /// Coerce and bounds-check raw pagination query parameters.
    ///
    /// Coercion runs before bounds checks. Defaults apply only when a
    /// parameter is entirely absent; present-but-invalid input is an
    /// error, never silently defaulted.
    pub fn from_query(query: &PageQuery) -> Result<Self, ShapeError> {
        let mut errors = ShapeError::new();

        let page = match &query.page {
            None => DEFAULT_PAGE,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(n) if n >= 1 => n as u64,
                Ok(_) => {
                    errors.push("page", "range", "must be a positive integer");
                    DEFAULT_PAGE
                }
                Err(_) => {
                    errors.push("page", "coercion", "must be an integer");
                    DEFAULT_PAGE
                }
            },
        };

        let limit = match &query.limit {
            None => DEFAULT_LIMIT,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(n) if (1..=MAX_LIMIT as i64).contains(&n) => n as u64,
                Ok(_) => {
                    errors.push(
                        "limit",
                        "range",
                        format!("must be between 1 and {}", MAX_LIMIT),
                    );
                    DEFAULT_LIMIT
                }
                Err(_) => {
                    errors.push("limit", "coercion", "must be an integer");
                    DEFAULT_LIMIT
                }
            },
        };

        errors.into_result(Self { page, limit })
    }
}
