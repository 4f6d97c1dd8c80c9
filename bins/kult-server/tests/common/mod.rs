//! Shared helpers for Kult server integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use kult_server::api::{AppState, create_router};
use kult_server::config::Config;
use serde_json::{Value, json};
use sqlx::{ConnectOptions, PgPool};
use tower::ServiceExt;

pub fn setup_test_app(pool: PgPool) -> Router {
    let config = Config::new(pool.connect_options().to_url_lossy().to_string());
    create_router(AppState { pool, config })
}

/// Send a request and return the status with the decoded JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn create_user(app: &Router, address: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/user/create",
        Some(json!({ "walletAddress": address })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create user failed: {}", body);
    body
}

pub fn artwork_body(address: &str, name: &str, author: &str, kind: &str) -> Value {
    json!({
        "walletAddress": address,
        "name": name,
        "author": author,
        "publicationYear": 1965,
        "type": kind,
    })
}

/// Add an artwork and return its id (new or existing).
pub async fn add_artwork(app: &Router, body: Value) -> i64 {
    let (status, body) = send(app, Method::POST, "/artwork/add", Some(body)).await;
    assert_eq!(status, StatusCode::OK, "add artwork failed: {}", body);
    body["artwork"]["id"]
        .as_i64()
        .or_else(|| body["id"].as_i64())
        .expect("response carries an artwork id")
}

pub async fn list(app: &Router, query: &str) -> Value {
    let (status, body) = send(app, Method::GET, &format!("/artwork/list?{}", query), None).await;
    assert_eq!(status, StatusCode::OK, "list failed: {}", body);
    body
}
