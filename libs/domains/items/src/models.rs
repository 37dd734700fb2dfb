use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Maximum length of an item name, in characters
pub const NAME_MAX_LEN: usize = 120;
/// Maximum length of an item description, in characters
pub const DESCRIPTION_MAX_LEN: usize = 500;
/// Page number used when the client omits `page`
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when the client omits `limit`
pub const DEFAULT_LIMIT: u64 = 20;
/// Largest page size a client may request
pub const MAX_LIMIT: u64 = 100;

/// Item entity
///
/// `id` and `created_at` are owned by the persistence collaborator:
/// they are absent on creation and assigned on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned by the persistence layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Item name (1-120 characters)
    pub name: String,
    /// Optional description (up to 500 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp, assigned by the persistence layer
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// DTO for creating a new item.
///
/// Exactly `Item` minus the server-assigned fields; the struct has no
/// `id`/`createdAt` slots, so client-supplied values for them cannot
/// survive validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Raw pagination query parameters, before coercion.
///
/// Query values arrive as text; [`Pagination::from_query`] coerces and
/// bounds-checks them.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number (positive integer, default 1)
    pub page: Option<String>,
    /// Page size (1-100, default 20)
    pub limit: Option<String>,
}

/// Normalized pagination.
///
/// Once constructed, `page >= 1` and `1 <= limit <= 100` hold
/// unconditionally; downstream paging logic relies on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    /// Number of records to skip for this page.
    ///
    /// Saturates rather than overflowing: a page number near `u64::MAX`
    /// is valid input and must land past the end of the data, not panic.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Paginated list envelope
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    /// Total number of records across all pages
    pub total: u64,
}
