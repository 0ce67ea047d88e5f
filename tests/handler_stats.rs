mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};

#[tokio::test]
async fn test_stats_after_creation() {
    let server = common::create_test_server();
    common::shorten(&server, "https://example.com", "asd148").await;

    let response = server.get("/asd148/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["redirectCount"], 0);

    let created: DateTime<Utc> = json["created"].as_str().unwrap().parse().unwrap();
    let last_redirect: DateTime<Utc> = json["lastRedirect"].as_str().unwrap().parse().unwrap();
    assert_eq!(created, last_redirect);
}

#[tokio::test]
async fn test_stats_after_redirect() {
    let server = common::create_test_server();
    common::shorten(&server, "https://example.com", "asd148").await;

    server.get("/asd148").await.assert_status(StatusCode::FOUND);

    let json = server.get("/asd148/stats").await.json::<serde_json::Value>();
    assert_eq!(json["redirectCount"], 1);

    let created: DateTime<Utc> = json["created"].as_str().unwrap().parse().unwrap();
    let last_redirect: DateTime<Utc> = json["lastRedirect"].as_str().unwrap().parse().unwrap();
    assert!(last_redirect >= created);
}

#[tokio::test]
async fn test_stats_does_not_count_as_redirect() {
    let server = common::create_test_server();
    common::shorten(&server, "https://example.com", "asd148").await;

    server.get("/asd148/stats").await.assert_status_ok();
    server.get("/asd148/stats").await.assert_status_ok();

    let json = server.get("/asd148/stats").await.json::<serde_json::Value>();
    assert_eq!(json["redirectCount"], 0);
}

#[tokio::test]
async fn test_stats_not_found() {
    let server = common::create_test_server();

    let response = server.get("/nope00/stats").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortcode"], "nope00");
    assert_eq!(json["error_message"], "Shortcode not found");
}

#[tokio::test]
async fn test_stats_malformed_shortcode() {
    let server = common::create_test_server();

    let response = server.get("/abc/stats").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortcode"], "abc");
    assert_eq!(json["error_message"], "Shortcode not found");
}

#[tokio::test]
async fn test_stats_trailing_slash() {
    let server = common::create_app_server();
    common::shorten(&server, "https://example.com", "asd148").await;

    let response = server.get("/asd148/stats/").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["redirectCount"], 0);
}
