mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    Router,
};
use cinema_booking_api::routes::create_app;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

#[tokio::test]
async fn health_and_fallback() -> anyhow::Result<()> {
    let app = create_app(common::setup_state().await?);

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");

    let (status, body) = send(&app, "GET", "/api/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], "/api/nowhere");
    Ok(())
}

#[tokio::test]
async fn menu_items_over_http() -> anyhow::Result<()> {
    let app = create_app(common::setup_state().await?);

    let (status, body) = send(
        &app,
        "POST",
        "/api/menu-items",
        Some(json!({ "name": "Movies", "url": "/movies" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let root_id = body["data"]["id"].as_i64().expect("id");

    let (status, _) = send(
        &app,
        "POST",
        "/api/menu-items",
        Some(json!({ "name": "Now showing", "url": "/movies/now", "parent_id": root_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", "/api/menu-items", None).await;
    assert_eq!(status, StatusCode::OK);
    let tree = body["data"].as_array().expect("tree array");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0]["name"], "Movies");
    assert_eq!(tree[0]["children"][0]["name"], "Now showing");
    assert_eq!(tree[0]["children"][0]["children"], json!([]));

    let (status, body) = send(&app, "GET", &format!("/api/menu-items/{root_id}/parent"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());

    let (status, _) = send(&app, "GET", "/api/menu-items/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn crud_endpoints_paginate_and_reject_bad_references() -> anyhow::Result<()> {
    let app = create_app(common::setup_state().await?);

    for name in ["Hall 1", "Hall 2", "Hall 3"] {
        let (status, _) = send(&app, "POST", "/api/show-rooms", Some(json!({ "name": name }))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/api/show-rooms?page=2&per_page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["meta"]["page"], 2);
    assert_eq!(body["data"].as_array().expect("rooms").len(), 1);
    assert_eq!(body["data"][0]["name"], "Hall 3");

    let (status, body) = send(&app, "GET", "/api/show-rooms?page=9223372036854775807", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["data"], json!([]));

    let (status, body) = send(
        &app,
        "POST",
        "/api/seats",
        Some(json!({ "seat_number": "A1", "show_room": 999 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().expect("message").starts_with("Bad Request"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({ "first_name": "Owner", "type": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["type"], "admin");

    let (status, body) = send(&app, "GET", "/api/users?type=admin", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 1);

    let (status, _) = send(&app, "DELETE", "/api/show-rooms/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", "/api/show-rooms/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
