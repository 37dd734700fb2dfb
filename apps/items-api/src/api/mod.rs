//! API routes module

use axum::Router;
use domain_items::MemoryItemRepository;

/// Create all API routes
/// Note: These are nested under /api by axum_kit::create_router
pub fn routes(repository: MemoryItemRepository) -> Router {
    Router::new().nest("/items", domain_items::handlers::router(repository))
}
