#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use person_api::{connect, PersonModule, StoreOptions};

/// Fresh in-memory store with `seed` random persons (ids 1..=seed).
pub async fn test_module(seed: u32) -> PersonModule {
    let db = connect(&StoreOptions::in_memory())
        .await
        .expect("in-memory store");
    let module = PersonModule::init(db).await.expect("module init");
    module.seed(seed).await.expect("seeding");
    module
}

pub async fn test_router(seed: u32) -> Router {
    test_module(seed).await.register_rest(Router::new())
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// A person as returned by the API: integer id, required strings, optional fields
/// either null or of the expected type.
pub fn is_person_shape(v: &Value) -> bool {
    let Some(obj) = v.as_object() else {
        return false;
    };
    let nullable_str = |k: &str| obj.get(k).is_some_and(|x| x.is_null() || x.is_string());
    obj.get("id").is_some_and(Value::is_i64)
        && obj.get("first_name").is_some_and(Value::is_string)
        && obj.get("last_name").is_some_and(Value::is_string)
        && obj.get("email").is_some_and(Value::is_string)
        && nullable_str("birthdate")
        && nullable_str("bio")
        && obj
            .get("lucky_number")
            .is_some_and(|x| x.is_null() || x.is_i64())
}

/// Poll `/api/logs` until it holds at least `n` entries. Log rows are written
/// off the response path, so they may lag behind the request that produced them.
pub async fn wait_for_logs(app: &Router, n: usize) -> Vec<Value> {
    for _ in 0..100 {
        let (_, body) = get(app, "/api/logs").await;
        if let Some(entries) = body.as_array() {
            if entries.len() >= n {
                return entries.clone();
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("expected at least {n} request log entries");
}
