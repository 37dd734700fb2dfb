use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_kit::{ErrorResponse, ShapedJson, UuidPath};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, Page, PageQuery, Pagination};
use crate::repository::ItemRepository;

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(schemas(Item, CreateItem, Page<Item>, ErrorResponse)),
    tags(
        (name = "Items", description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints.
///
/// Handlers are declarative wiring: validate the input shape, delegate
/// to the repository, map the result. Business semantics live behind
/// the `ItemRepository` seam.
pub fn router<R: ItemRepository + 'static>(repository: R) -> Router {
    let repository = Arc::new(repository);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(repository)
}

/// List items, paginated
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of items", body = Page<Item>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(repository): State<Arc<R>>,
    Query(query): Query<PageQuery>,
) -> ItemResult<Json<Page<Item>>> {
    let pagination = Pagination::from_query(&query)?;
    let page = repository.list(pagination).await?;
    Ok(Json(page))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(repository): State<Arc<R>>,
    ShapedJson(input): ShapedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = repository.create(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Malformed item ID", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(repository): State<Arc<R>>,
    UuidPath(id): UuidPath,
) -> ItemResult<Json<Item>> {
    let item = repository
        .get_by_id(id)
        .await?
        .ok_or(ItemError::NotFound(id))?;
    Ok(Json(item))
}

/// Replace the client-suppliable fields of an item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = CreateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(repository): State<Arc<R>>,
    UuidPath(id): UuidPath,
    ShapedJson(input): ShapedJson<CreateItem>,
) -> ItemResult<Json<Item>> {
    let item = repository
        .update(id, input)
        .await?
        .ok_or(ItemError::NotFound(id))?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted successfully"),
        (status = 400, description = "Malformed item ID", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(repository): State<Arc<R>>,
    UuidPath(id): UuidPath,
) -> ItemResult<impl IntoResponse> {
    if !repository.delete(id).await? {
        return Err(ItemError::NotFound(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
