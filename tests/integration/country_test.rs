//! Integration tests for the country lookup endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_list_all_countries() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/countries", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let names: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Antarctica", "Brazil", "France", "Germany", "Japan"]);
}

#[tokio::test]
async fn test_list_by_region() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/countries?region=Europe", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([
            { "name": "France", "alpha2": "FR", "alpha3": "FRA", "region": "Europe" },
            { "name": "Germany", "alpha2": "DE", "alpha3": "DEU", "region": "Europe" },
        ])
    );

    let response = app
        .request("GET", "/api/countries?region=Oceania", None, None)
        .await;
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_empty_region_lists_everything() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/countries?region=", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_get_by_alpha2_any_case() {
    let app = TestApp::new();

    for code in ["JP", "jp", "Jp"] {
        let response = app
            .request("GET", &format!("/api/countries/{code}"), None, None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body,
            json!({ "name": "Japan", "alpha2": "JP", "alpha3": "JPN", "region": "Asia" })
        );
    }
}

#[tokio::test]
async fn test_country_without_region_serializes_null() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/countries/aq", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["region"], serde_json::Value::Null);
    assert!(response.body.get("id").is_none());
}

#[tokio::test]
async fn test_unknown_country_is_404() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/countries/zz", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "error": "Country not found" }));
}
