//! Items Domain
//!
//! The `Item` entity with its validation contracts and HTTP endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (declarative wiring)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Shape    │  ← validation: untyped input → typed value | violations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← persistence seam (trait + in-memory adapter)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← entity, DTOs, pagination
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{MemoryItemRepository, handlers};
//!
//! let repository = MemoryItemRepository::new();
//! let router = handlers::router(repository);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod shape;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use memory::MemoryItemRepository;
pub use models::{CreateItem, Item, Page, PageQuery, Pagination};
pub use repository::ItemRepository;
