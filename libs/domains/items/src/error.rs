use axum::response::{IntoResponse, Response};
use axum_kit::{AppError, ShapeError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            ItemError::Shape(e) => AppError::Shape(e),
            ItemError::Storage(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        // Route through AppError so every failure exits via the same
        // classification point
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
