use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, Page, Pagination};

/// Repository trait for Item persistence.
///
/// This is the external-collaborator boundary: handlers validate input
/// and delegate here. Implementations own assignment of the
/// server-controlled fields (`id`, `createdAt`).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item, assigning `id` and `createdAt`
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>>;

    /// List items for one page
    async fn list(&self, pagination: Pagination) -> ItemResult<Page<Item>>;

    /// Replace the client-suppliable fields of an existing item
    async fn update(&self, id: Uuid, input: CreateItem) -> ItemResult<Option<Item>>;

    /// Delete an item by ID; returns whether it existed
    async fn delete(&self, id: Uuid) -> ItemResult<bool>;
}
