//! End-to-end session lifecycle tests.

use std::time::Duration;

use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use serde_json::json;

use daylog_auth::jwt::claims::TokenKind;
use daylog_auth::jwt::encoder::TokenEncoder;
use daylog_core::config::auth::AuthConfig;

use crate::helpers::{
    self, body_json, cookie_header, cookie_request, json_request, login_request, unique_email,
};

#[tokio::test]
async fn test_register_login_profile_logout_flow() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let email = unique_email("flow");

    // Register
    let response = app
        .request(json_request("POST", "/user/register", &json!({
            "email": email,
            "password": "Passw0rd!",
        })))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User registered");

    // Login issues both session cookies
    let response = app.request(login_request(&email, "Passw0rd!")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let set_cookies: Vec<_> = response.headers().get_all(SET_COOKIE).iter().collect();
    assert_eq!(set_cookies.len(), 2);
    let cookies = cookie_header(&response);
    assert!(cookies.contains("access_token="));
    assert!(cookies.contains("refresh_token="));
    let body = body_json(response).await;
    assert_eq!(body["message"], "Authenticated");

    // Profile
    let response = app.request(cookie_request("GET", "/user/get", &cookies)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["email"], email.as_str());
    assert!(body.get("password_hash").is_none());

    // Logout
    let response = app
        .request(cookie_request("DELETE", "/oauth2/token", &cookies))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Logged out");

    // The revoked session is rejected before anything else
    let response = app.request(cookie_request("GET", "/user/get", &cookies)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Blacklisted token");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let email = unique_email("badcreds");
    app.register_and_login(&email, "Passw0rd!").await;

    // Wrong password and unknown email read identically
    let response = app.request(login_request(&email, "Wrong0ne!")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid credentials");

    let response = app
        .request(login_request(&unique_email("nobody"), "Passw0rd!"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_logout_is_always_ok() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    // No cookies at all
    let response = app
        .request(cookie_request("DELETE", "/oauth2/token", "unrelated=1"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Logged out");

    // Garbage cookies are skipped, not rejected
    let response = app
        .request(cookie_request(
            "DELETE",
            "/oauth2/token",
            "access_token=garbage; refresh_token=garbage",
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Double logout: the second revocation is a no-op
    let email = unique_email("doublelogout");
    let cookies = app.register_and_login(&email, "Passw0rd!").await;
    let response = app
        .request(cookie_request("DELETE", "/oauth2/token", &cookies))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = app
        .request(cookie_request("DELETE", "/oauth2/token", &cookies))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_issues_new_access_token() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let email = unique_email("refresh");
    let cookies = app.register_and_login(&email, "Passw0rd!").await;

    let response = app
        .request(cookie_request("PATCH", "/oauth2/token", &cookies))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let fresh = cookie_header(&response);
    assert!(fresh.starts_with("access_token="));
    let body = body_json(response).await;
    assert_eq!(body["message"], "Refreshed");

    // Refresh without a refresh cookie is rejected
    let response = app
        .request(cookie_request("PATCH", "/oauth2/token", "access_token=x"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid credentials");

    // A tampered refresh token fails signature verification
    let response = app
        .request(cookie_request(
            "PATCH",
            "/oauth2/token",
            "refresh_token=not.a.token",
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn test_expired_access_token_is_rejected_as_outdated() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    // Validly signed, unrevoked, but the access token's expiration_date
    // is already behind the clock.
    let encoder = TokenEncoder::new(&AuthConfig {
        access_ttl_minutes: 0,
        ..AuthConfig::default()
    });
    let (access, _) = encoder.issue(1, TokenKind::Access).expect("issue");
    let (refresh, _) = encoder.issue(1, TokenKind::Refresh).expect("issue");
    tokio::time::sleep(Duration::from_millis(20)).await;

    let cookies = format!("access_token={access}; refresh_token={refresh}");
    let response = app.request(cookie_request("GET", "/user/get", &cookies)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Outdated access_token");
}

#[tokio::test]
async fn test_expired_refresh_token_is_rejected_as_outdated() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let encoder = TokenEncoder::new(&AuthConfig {
        refresh_ttl_days: 0,
        ..AuthConfig::default()
    });
    let (access, _) = encoder.issue(1, TokenKind::Access).expect("issue");
    let (refresh, _) = encoder.issue(1, TokenKind::Refresh).expect("issue");
    tokio::time::sleep(Duration::from_millis(20)).await;

    // The guard checks the refresh token first, even with a live access token
    let cookies = format!("access_token={access}; refresh_token={refresh}");
    let response = app.request(cookie_request("GET", "/user/get", &cookies)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Outdated refresh_token");

    // And an expired refresh token cannot mint new access tokens
    let response = app
        .request(cookie_request(
            "PATCH",
            "/oauth2/token",
            &format!("refresh_token={refresh}"),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Outdated refresh_token");
}

#[tokio::test]
async fn test_guard_requires_both_cookies() {
    let Some(app) = helpers::test_app().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let email = unique_email("guard");
    let cookies = app.register_and_login(&email, "Passw0rd!").await;
    let access_only = cookies
        .split("; ")
        .find(|c| c.starts_with("access_token="))
        .expect("access cookie should be present")
        .to_string();

    // Missing refresh cookie
    let response = app
        .request(cookie_request("GET", "/user/get", &access_only))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid credentials");

    // No cookies at all
    let response = app.request(cookie_request("GET", "/user/get", "a=b")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
