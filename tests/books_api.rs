//! Black-box tests for the books service router.
//!
//! Drives the `/api/books` surface end to end over an in-memory store:
//! counter-based id assignment, the list envelope with its `total` count,
//! and the fixed-order required-field validation.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use satchel::{routes::books_router, state::BooksState, store::memory::MemoryBookStore};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn empty_app() -> Router {
    books_router(BooksState::new(Arc::new(MemoryBookStore::default())))
}

fn post_book(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/books")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Ids start at 1 on an empty store and count up with each create, and the
/// list `total` tracks the number of records.
#[tokio::test]
async fn ids_count_up_from_one_and_total_tracks_creates() {
    let app = empty_app();

    for (expected_id, title) in [(1, "Dune"), (2, "Hyperion")] {
        let response = app
            .clone()
            .oneshot(post_book(
                &json!({ "title": title, "author": "someone", "year": 1965 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], expected_id);
    }

    let request = Request::builder()
        .method("GET")
        .uri("/api/books")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["data"][1]["title"], "Hyperion");
}

/// When several fields are absent, the first one in title/author/year order
/// is the one reported.
#[tokio::test]
async fn missing_fields_are_reported_in_a_fixed_order() {
    let response = empty_app()
        .oneshot(post_book(&json!({ "year": 2000 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required FieldsL: title");
}

/// A create with the wrong content type never reaches the store.
#[tokio::test]
async fn wrong_content_type_leaves_the_store_untouched() {
    let app = empty_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/books")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from(
            json!({ "title": "A", "author": "B", "year": 2000 }).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Content-type must be application/json");

    let request = Request::builder()
        .method("GET")
        .uri("/api/books")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 0);
}
