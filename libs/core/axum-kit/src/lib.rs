//! # Axum Kit
//!
//! Shared utilities for building the Axum-based HTTP service.
//!
//! ## Modules
//!
//! - **[`shape`]**: shape validation primitives (`ShapeError`,
//!   `FromShape`, the `ShapedJson` extractor)
//! - **[`errors`]**: the `AppError` terminal classifier and the
//!   standard `ErrorResponse` body
//! - **[`server`]**: router assembly (`/api` mount, `/health`, docs,
//!   tracing, 404 fallback) and server startup with graceful shutdown
//! - **[`health`]**: the root-level liveness handler

pub mod errors;
pub mod health;
pub mod server;
pub mod shape;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export the health handler
pub use health::{HealthResponse, health_handler};

// Re-export shape validation types
pub use shape::{FieldViolation, FromShape, ShapeError, ShapedJson, UuidPath};

// Re-export server helpers
pub use server::{create_app, create_router, shutdown_signal};
