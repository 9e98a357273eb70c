//! Blacklist conflict semantics and the admin views.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use uuid::Uuid;

use daylog_auth::jwt::claims::TokenKind;
use daylog_core::error::ErrorKind;

use crate::helpers::{self, body_json, cookie_request, unique_email};

#[tokio::test]
async fn test_duplicate_insert_surfaces_a_conflict() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let blacklist = app.state.blacklist_repo.clone();
    let token = format!("dup-{}", Uuid::new_v4());
    let expires = Utc::now() + Duration::hours(1);

    blacklist
        .insert(&token, expires)
        .await
        .expect("first insert should succeed");
    let err = blacklist
        .insert(&token, expires)
        .await
        .expect_err("duplicate insert should fail");
    assert_eq!(err.kind, ErrorKind::Conflict);

    blacklist.delete(&token).await.expect("cleanup should succeed");
}

#[tokio::test]
async fn test_concurrent_revocations_settle_on_one_entry() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    // Two revocations of the same token race; whichever loses, both
    // calls succeed and exactly one entry lands on the blacklist.
    let (token, _) = app
        .state
        .token_encoder
        .issue(1, TokenKind::Access)
        .expect("issue should succeed");

    let revoker = &app.state.token_revoker;
    let (a, b) = tokio::join!(revoker.revoke(&token), revoker.revoke(&token));
    let a = a.expect("revoke should succeed");
    let b = b.expect("revoke should succeed");
    assert!(a || b);

    let blacklist = &app.state.blacklist_repo;
    assert!(blacklist.contains(&token).await.expect("lookup should succeed"));

    // A third pass sees the existing entry and declines
    assert!(!revoker.revoke(&token).await.expect("revoke should succeed"));

    blacklist.delete(&token).await.expect("cleanup should succeed");
}

#[tokio::test]
async fn test_admin_views_list_and_delete_entries() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let email = unique_email("admin");
    let cookies = app.register_and_login(&email, "Passw0rd!").await;

    let token = format!("entry-{}", Uuid::new_v4());
    app.state
        .blacklist_repo
        .insert(&token, Utc::now() + Duration::hours(1))
        .await
        .expect("insert should succeed");

    // The admin surface sits behind the session guard
    let response = app
        .request(cookie_request("GET", "/admin/blacklist", "a=b"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .request(cookie_request("GET", "/admin/blacklist", &cookies))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(
        body.as_array()
            .expect("list should be an array")
            .iter()
            .any(|e| e["token"] == token.as_str())
    );

    let response = app
        .request(cookie_request(
            "DELETE",
            &format!("/admin/blacklist/{token}"),
            &cookies,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Deleted");
    assert!(
        !app.state
            .blacklist_repo
            .contains(&token)
            .await
            .expect("lookup should succeed")
    );
}
