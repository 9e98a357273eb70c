//! Activity CRUD tests. These routes carry no session guard.

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::helpers::{self, body_json};

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

#[tokio::test]
async fn test_activity_crud_flow() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let title = format!("walk-{}", uuid::Uuid::new_v4());

    // Create with defaults: notes empty, done false, date null
    let response = app
        .request(json_request("POST", "/v1/activity", &json!({"title": title})))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Created");

    // It shows up in the list
    let response = app.request(bare_request("GET", "/v1/activities")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let created = body
        .as_array()
        .expect("list should be an array")
        .iter()
        .find(|a| a["title"] == title.as_str())
        .cloned()
        .expect("created activity should be listed");
    assert_eq!(created["notes"], "");
    assert_eq!(created["done"], false);
    assert!(created["date"].is_null());
    let id = created["id"]
        .as_str()
        .expect("id should be a string")
        .to_string();

    // Mark it done
    let response = app
        .request(json_request(
            "PATCH",
            &format!("/v1/activity/{id}"),
            &json!({"done": true}),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Patched");

    let response = app.request(bare_request("GET", "/v1/activities")).await;
    let body = body_json(response).await;
    let patched = body
        .as_array()
        .expect("list should be an array")
        .iter()
        .find(|a| a["id"] == id.as_str())
        .cloned()
        .expect("patched activity should be listed");
    assert_eq!(patched["done"], true);

    // Delete, then delete again: idempotent
    let response = app
        .request(bare_request("DELETE", &format!("/v1/activity/{id}")))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Deleted");

    let response = app
        .request(bare_request("DELETE", &format!("/v1/activity/{id}")))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_activity_create_honors_explicit_fields() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let title = format!("review-{}", uuid::Uuid::new_v4());
    let response = app
        .request(json_request("POST", "/v1/activity", &json!({
            "title": title,
            "notes": "quarterly numbers",
            "date": "2026-09-01T09:00:00Z",
            "done": true,
        })))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.request(bare_request("GET", "/v1/activities")).await;
    let body = body_json(response).await;
    let created = body
        .as_array()
        .expect("list should be an array")
        .iter()
        .find(|a| a["title"] == title.as_str())
        .cloned()
        .expect("created activity should be listed");
    assert_eq!(created["notes"], "quarterly numbers");
    assert_eq!(created["done"], true);
    assert!(created["date"].is_string());
}

#[tokio::test]
async fn test_patching_unknown_activity_is_404() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let response = app
        .request(json_request(
            "PATCH",
            &format!("/v1/activity/{}", uuid::Uuid::new_v4()),
            &json!({"done": true}),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Activity not found");
}
