//! In-memory repository adapter.
//!
//! Stands in for a real persistence collaborator so the service runs
//! and end-to-end tests exist. Deliberately semantics-free: no
//! duplicate-name checks, no versioning. State lives for the process
//! lifetime only.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, Page, Pagination};
use crate::repository::ItemRepository;

/// `ItemRepository` backed by a process-local map.
#[derive(Debug, Default)]
pub struct MemoryItemRepository {
    items: RwLock<HashMap<Uuid, Item>>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let id = Uuid::new_v4();
        let item = Item {
            id: Some(id),
            name: input.name,
            description: input.description,
            created_at: Some(Utc::now()),
        };

        self.items.write().await.insert(id, item.clone());
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn list(&self, pagination: Pagination) -> ItemResult<Page<Item>> {
        let map = self.items.read().await;

        let mut all: Vec<Item> = map.values().cloned().collect();
        // Stable order: oldest first, id as tiebreaker
        all.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));

        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit as usize)
            .collect();

        Ok(Page {
            items,
            page: pagination.page,
            limit: pagination.limit,
            total,
        })
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: CreateItem) -> ItemResult<Option<Item>> {
        let mut map = self.items.write().await;

        Ok(map.get_mut(&id).map(|item| {
            item.name = input.name;
            item.description = input.description;
            item.clone()
        }))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ItemResult<bool> {
        Ok(self.items.write().await.remove(&id).is_some())
    }
}
