//! Handler tests for the Items domain
//!
//! These verify the HTTP surface of the domain router in isolation:
//! request validation, response serialization, status codes, and error
//! responses. The full application pipeline (the `/api` mount and the
//! 404 fallback) is covered in `pipeline_test.rs`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> axum::Router {
    handlers::router(MemoryItemRepository::new())
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_create_item_returns_201_with_server_fields() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/",
            json!({"name": "Widget", "description": "A small widget"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let item = json_body(response.into_body()).await;
    assert_eq!(item["name"], "Widget");
    assert_eq!(item["description"], "A small widget");
    // Persistence assigns the server-owned fields
    assert!(item["id"].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
    assert!(item.get("createdAt").is_some());
}

#[tokio::test]
async fn test_create_item_rejects_empty_name_with_violation_list() {
    let app = app();

    let response = app.oneshot(post_json("/", json!({"name": ""}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "BadRequest");
    assert_eq!(body["details"][0]["field"], "name");
}

#[tokio::test]
async fn test_create_item_ignores_client_supplied_server_fields() {
    let app = app();
    let supplied_id = "8c1a9c3e-2f4b-4f6d-9d9e-1b2c3d4e5f60";

    let response = app
        .oneshot(post_json(
            "/",
            json!({
                "name": "Widget",
                "id": supplied_id,
                "createdAt": "1999-01-01T00:00:00Z"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let item = json_body(response.into_body()).await;
    // The stored identity is server-assigned, not the client's
    assert_ne!(item["id"], supplied_id);
    assert_ne!(item["createdAt"], "1999-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_create_item_malformed_json_is_a_client_error() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "BadRequest");
}

#[tokio::test]
async fn test_list_items_defaults_pagination() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let page = json_body(response.into_body()).await;
    assert_eq!(page["page"], 1);
    assert_eq!(page["limit"], 20);
    assert_eq!(page["total"], 0);
    assert!(page["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_items_honours_page_and_limit() {
    let repository = MemoryItemRepository::new();
    let app = handlers::router(repository);

    for i in 0..3 {
        let response = app
            .clone()
            .oneshot(post_json("/", json!({"name": format!("item-{}", i)})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?page=2&limit=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = json_body(response.into_body()).await;
    assert_eq!(page["total"], 3);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_items_far_past_the_end_is_an_empty_page() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_json("/", json!({"name": "Widget"})))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?page=9223372036854775807&limit=100")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = json_body(response.into_body()).await;
    assert_eq!(page["total"], 1);
    assert!(page["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_items_rejects_out_of_range_limit() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?limit=500")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["details"][0]["field"], "limit");
}

#[tokio::test]
async fn test_get_item_roundtrip() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_json("/", json!({"name": "Widget"})))
        .await
        .unwrap();
    let created = json_body(created.into_body()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item = json_body(response.into_body()).await;
    assert_eq!(item["id"], id.as_str());
    assert_eq!(item["name"], "Widget");
}

#[tokio::test]
async fn test_get_item_unknown_id_is_404() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn test_get_item_malformed_id_is_400_naming_id() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["details"][0]["field"], "id");
}

#[tokio::test]
async fn test_update_item_replaces_fields() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_json("/", json!({"name": "before"})))
        .await
        .unwrap();
    let created = json_body(created.into_body()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"name": "after"})).unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item = json_body(response.into_body()).await;
    assert_eq!(item["name"], "after");
    assert_eq!(item["id"], id.as_str());
}

#[tokio::test]
async fn test_update_item_validates_before_touching_storage() {
    let app = app();

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", uuid::Uuid::new_v4()))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"name": "x".repeat(121)})).unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    // Validation failure, not the storage 404
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["details"][0]["field"], "name");
}

#[tokio::test]
async fn test_delete_item_returns_204_then_404() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_json("/", json!({"name": "Widget"})))
        .await
        .unwrap();
    let created = json_body(created.into_body()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
