#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use serde_json::json;
use shortcode_service::api::routes::routes;
use shortcode_service::application::services::{BootstrapService, ShortcodeService};
use shortcode_service::infrastructure::persistence::{
    InMemoryShortcodeRepository, PgShortcodeRepository,
};
use shortcode_service::routes::app_router;
use shortcode_service::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// State backed by a fresh in-memory store.
///
/// The same store answers both shortcode queries and `/init`.
pub fn create_test_state() -> AppState {
    let repo = Arc::new(InMemoryShortcodeRepository::new());

    AppState::new(
        Arc::new(ShortcodeService::new(repo.clone())),
        Arc::new(BootstrapService::new(repo)),
    )
}

/// Test server over the full API router with an in-memory store.
pub fn create_test_server() -> TestServer {
    TestServer::new(routes().with_state(create_test_state())).unwrap()
}

/// Test server over the production router, including tracing and
/// trailing-slash normalization.
pub fn create_app_server() -> TestServer {
    let app = app_router(create_test_state());

    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// Shortcode service over a migrated `#[sqlx::test]` database.
pub fn create_pg_service(pool: PgPool) -> ShortcodeService {
    ShortcodeService::new(Arc::new(PgShortcodeRepository::new(Arc::new(pool))))
}

pub async fn insert_shortcode(pool: &PgPool, shortcode: &str, url: &str) {
    sqlx::query("INSERT INTO shortcode (url, shortcode) VALUES ($1, $2)")
        .bind(url)
        .bind(shortcode)
        .execute(pool)
        .await
        .unwrap();
}

/// Shortens `url` under `shortcode` and asserts it was created.
pub async fn shorten(server: &TestServer, url: &str, shortcode: &str) {
    server
        .post("/shorten")
        .json(&json!({ "url": url, "shortcode": shortcode }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}
