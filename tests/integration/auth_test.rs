//! Integration tests for registration, sign-in, and password changes.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;
use uuid::Uuid;

use countrydesk_auth::jwt::Subject;
use countrydesk_auth::store::UserStore;

use helpers::TestApp;

#[tokio::test]
async fn test_register_then_duplicate() {
    let app = TestApp::new();

    let response = app.register("alice", "s3cret").await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body.get("message").is_some());

    let response = app.register("alice", "s3cret").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        serde_json::json!({ "error": "User with this login already exists" })
    );
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new();

    for body in [
        serde_json::json!({ "login": "alice" }),
        serde_json::json!({ "password": "s3cret" }),
        serde_json::json!({ "login": "", "password": "s3cret" }),
        serde_json::json!({}),
    ] {
        let response = app
            .request("POST", "/api/auth/register", Some(body), None)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error(), Some("Login and password are required"));
    }

    assert!(app.users.is_empty().await);
}

#[tokio::test]
async fn test_register_malformed_body_is_missing_fields() {
    let app = TestApp::new();

    let json = vec![("Content-Type", "application/json".to_string())];
    for body in ["", "{not json", "[1,2,3]", r#"{"login": 5, "password": "x"}"#] {
        let response = app
            .request_raw("POST", "/api/auth/register", &json, body)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response.error(), Some("Login and password are required"));
    }

    let response = app
        .request_raw(
            "POST",
            "/api/auth/register",
            &[],
            r#"{"login":"alice","password":"s3cret"}"#,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sign_in_returns_version_zero_token() {
    let app = TestApp::new();
    app.register("alice", "s3cret").await;

    let response = app.sign_in("alice", "s3cret").await;
    assert_eq!(response.status, StatusCode::OK);

    let token = response.body["token"].as_str().unwrap();
    let claims = app.decode(token);
    assert_eq!(claims.login, "alice");
    assert_eq!(claims.token_version, 0);

    let user = app.users.find_by_login("alice").await.unwrap().unwrap();
    assert_eq!(claims.user_id(), user.id);
    assert_eq!(
        claims.exp - claims.iat,
        Duration::minutes(app.config.auth.token_ttl_minutes).num_seconds()
    );
}

#[tokio::test]
async fn test_sign_in_failures_are_identical() {
    let app = TestApp::new();
    app.register("alice", "s3cret").await;

    let unknown = app.sign_in("nobody", "s3cret").await;
    let wrong = app.sign_in("alice", "wrong").await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body, wrong.body);
    assert_eq!(unknown.error(), Some("Invalid login or password"));
}

#[tokio::test]
async fn test_sign_in_missing_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/sign-in",
            Some(serde_json::json!({ "login": "alice" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), Some("Login and password are required"));
}

#[tokio::test]
async fn test_update_password_full_scenario() {
    let app = TestApp::new();
    app.register("alice", "s3cret").await;
    let original = app.token_for("alice", "s3cret").await;

    let response = app
        .update_password(Some(&original), "s3cret", "newpass")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("message").is_some());

    // Old password is gone.
    let response = app.sign_in("alice", "s3cret").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // New password signs in with the bumped version.
    let fresh = app.token_for("alice", "newpass").await;
    assert_eq!(app.decode(&fresh).token_version, 1);

    // The original token is superseded.
    let response = app
        .update_password(Some(&original), "newpass", "another")
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), Some("Invalid or expired credentials"));

    // The fresh token is accepted.
    let response = app.update_password(Some(&fresh), "newpass", "another").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_password_rejections_share_one_body() {
    let app = TestApp::new();
    app.register("alice", "s3cret").await;
    let good = app.token_for("alice", "s3cret").await;
    let user = app.users.find_by_login("alice").await.unwrap().unwrap();

    let expired = app
        .tokens
        .issue(
            &Subject::new(user.id, "alice"),
            user.token_version,
            Some(Duration::seconds(-1)),
        )
        .unwrap()
        .token;
    let unknown_subject = app
        .tokens
        .issue(&Subject::new(Uuid::new_v4(), "ghost"), 0, None)
        .unwrap()
        .token;

    let mut responses = vec![
        app.update_password(None, "s3cret", "newpass").await,
        app.update_password(Some("not-a-jwt"), "s3cret", "newpass").await,
        app.update_password(Some(&expired), "s3cret", "newpass").await,
        app.update_password(Some(&unknown_subject), "s3cret", "newpass")
            .await,
        app.update_password(Some(&good), "wrong", "newpass").await,
    ];

    // Wrong scheme in the Authorization header.
    responses.push(
        app.request_raw(
            "POST",
            "/api/me/update-password",
            &[
                ("Content-Type", "application/json".to_string()),
                ("Authorization", format!("Token {good}")),
            ],
            r#"{"old_password":"s3cret","new_password":"newpass"}"#,
        )
        .await,
    );

    for response in &responses {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.body,
            serde_json::json!({ "error": "Invalid or expired credentials" })
        );
    }

    let user = app.users.find_by_login("alice").await.unwrap().unwrap();
    assert_eq!(user.token_version, 0);
}

#[tokio::test]
async fn test_update_password_missing_fields() {
    let app = TestApp::new();
    app.register("alice", "s3cret").await;
    let token = app.token_for("alice", "s3cret").await;

    let response = app
        .request(
            "POST",
            "/api/me/update-password",
            Some(serde_json::json!({ "old_password": "s3cret" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error(),
        Some("Old password and new password are required")
    );

    let response = app
        .request("POST", "/api/me/update-password", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // The token is untouched and still usable.
    let response = app.update_password(Some(&token), "s3cret", "newpass").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_legacy_update_password_path() {
    let app = TestApp::new();
    app.register("alice", "s3cret").await;
    let token = app.token_for("alice", "s3cret").await;

    let response = app
        .request(
            "POST",
            "/api/me/updatePassword",
            Some(serde_json::json!({
                "old_password": "s3cret",
                "new_password": "newpass",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let fresh = app.token_for("alice", "newpass").await;
    assert_eq!(app.decode(&fresh).token_version, 1);
}

#[tokio::test]
async fn test_ping() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/ping", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({ "status": "ok" }));
}
