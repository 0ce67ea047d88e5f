mod common;

#[tokio::test]
async fn test_init_first_call() {
    let server = common::create_test_server();

    let response = server.get("/init").await;

    response.assert_status_ok();
    response.assert_text("Database created. Database tables created.");
}

#[tokio::test]
async fn test_init_is_idempotent() {
    let server = common::create_test_server();

    server.get("/init").await.assert_status_ok();
    let response = server.get("/init").await;

    response.assert_status_ok();
    response.assert_text("Database already created. Database tables already created.");
}

#[tokio::test]
async fn test_init_keeps_existing_shortcodes() {
    let server = common::create_test_server();
    server.get("/init").await.assert_status_ok();
    common::shorten(&server, "https://example.com", "asd148").await;

    server.get("/init").await.assert_status_ok();

    server
        .get("/asd148")
        .await
        .assert_status(axum::http::StatusCode::FOUND);
}
