//! Blacklist sweeper behavior against a live database.

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Duration, Utc};

use daylog_worker::BlacklistSweeper;

use crate::helpers::{self, body_json, cookie_request, unique_email};

#[tokio::test]
async fn test_sweep_removes_only_expired_entries() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let stale = format!("stale-{}", uuid::Uuid::new_v4());
    let live = format!("live-{}", uuid::Uuid::new_v4());
    let blacklist = app.state.blacklist_repo.clone();

    blacklist
        .insert(&stale, Utc::now() - Duration::hours(1))
        .await
        .expect("insert should succeed");
    blacklist
        .insert(&live, Utc::now() + Duration::hours(1))
        .await
        .expect("insert should succeed");

    let sweeper = BlacklistSweeper::new(blacklist.clone());
    let removed = sweeper.run_sweep().await.expect("sweep should succeed");
    assert!(removed >= 1);

    assert!(!blacklist.contains(&stale).await.expect("lookup should succeed"));
    assert!(blacklist.contains(&live).await.expect("lookup should succeed"));

    blacklist.delete(&live).await.expect("cleanup should succeed");
}

#[tokio::test]
async fn test_revoked_session_survives_until_token_expiry() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    // Logout puts the live access token on the blacklist; a sweep right
    // after must not un-revoke the session.
    let email = unique_email("sweep-guard");
    let cookies = app.register_and_login(&email, "Passw0rd!").await;
    let response = app
        .request(cookie_request("DELETE", "/oauth2/token", &cookies))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let sweeper = BlacklistSweeper::new(Arc::clone(&app.state.blacklist_repo));
    sweeper.run_sweep().await.expect("sweep should succeed");

    let response = app.request(cookie_request("GET", "/user/get", &cookies)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Blacklisted token");
}
