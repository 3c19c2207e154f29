//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use countrydesk_api::AppState;
use countrydesk_auth::jwt::{Claims, TokenService};
use countrydesk_auth::store::MemoryUserStore;
use countrydesk_core::config::{AppConfig, AuthConfig};
use countrydesk_entity::country::Country;
use countrydesk_service::StaticCountryCatalog;

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret-integration-test";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// User store behind the router, for direct inspection
    pub users: MemoryUserStore,
    /// Token service sharing the router's secret
    pub tokens: TokenService,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with an empty user store
    pub fn new() -> Self {
        let config = AppConfig {
            auth: AuthConfig::with_secret(TEST_SECRET),
            ..AppConfig::default()
        };
        config.validate().expect("Test config must be valid");

        let users = MemoryUserStore::new();
        let catalog = StaticCountryCatalog::new(sample_countries());

        let state = AppState::new(
            Arc::new(config.clone()),
            Arc::new(users.clone()),
            Arc::new(catalog),
        );

        Self {
            router: countrydesk_api::build_router(state),
            users,
            tokens: TokenService::new(&config.auth),
            config,
        }
    }

    /// Register a user through the API
    pub async fn register(&self, login: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "login": login, "password": password })),
            None,
        )
        .await
    }

    /// Sign in through the API
    pub async fn sign_in(&self, login: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/sign-in",
            Some(serde_json::json!({ "login": login, "password": password })),
            None,
        )
        .await
    }

    /// Sign in and return the bearer token
    pub async fn token_for(&self, login: &str, password: &str) -> String {
        let response = self.sign_in(login, password).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Sign-in failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in sign-in response")
            .to_string()
    }

    /// Change a password through the API
    pub async fn update_password(
        &self,
        token: Option<&str>,
        old_password: &str,
        new_password: &str,
    ) -> TestResponse {
        self.request(
            "POST",
            "/api/me/update-password",
            Some(serde_json::json!({
                "old_password": old_password,
                "new_password": new_password,
            })),
            token,
        )
        .await
    }

    /// Verify a token with the app's secret
    pub fn decode(&self, token: &str) -> Claims {
        self.tokens.verify(token).expect("Token should verify")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut headers = vec![("Content-Type", "application/json".to_string())];
        if let Some(token) = token {
            headers.push(("Authorization", format!("Bearer {token}")));
        }

        self.request_raw(method, path, &headers, body_str).await
    }

    /// Make an HTTP request with explicit headers and a raw body
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        headers: &[(&str, String)],
        body: impl Into<Body>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        for (name, value) in headers {
            req = req.header(*name, value);
        }

        let req = req.body(body.into()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `error` field of an error body
    pub fn error(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

fn country(name: &str, alpha2: &str, alpha3: &str, region: Option<&str>) -> Country {
    Country {
        id: 0,
        name: name.to_string(),
        alpha2: alpha2.to_string(),
        alpha3: alpha3.to_string(),
        region: region.map(str::to_string),
    }
}

/// A small fixed catalog spanning several regions
pub fn sample_countries() -> Vec<Country> {
    vec![
        country("France", "FR", "FRA", Some("Europe")),
        country("Brazil", "BR", "BRA", Some("Americas")),
        country("Germany", "DE", "DEU", Some("Europe")),
        country("Japan", "JP", "JPN", Some("Asia")),
        country("Antarctica", "AQ", "ATA", None),
    ]
}
