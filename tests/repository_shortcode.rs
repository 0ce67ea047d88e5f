mod common;

use shortcode_service::domain::entities::NewShortcode;
use shortcode_service::domain::repositories::ShortcodeRepository;
use shortcode_service::error::AppError;
use shortcode_service::infrastructure::persistence::PgShortcodeRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_shortcode(shortcode: &str, url: &str) -> NewShortcode {
    NewShortcode {
        url: url.to_string(),
        shortcode: shortcode.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_insert_if_absent(pool: PgPool) {
    let repo = PgShortcodeRepository::new(Arc::new(pool));

    let record = repo
        .insert_if_absent(new_shortcode("asd148", "https://example.com"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.shortcode, "asd148");
    assert_eq!(record.url, "https://example.com");
    assert_eq!(record.redirect_count, 0);
    assert_eq!(record.redirect_last, Some(record.created));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_insert_duplicate_returns_none(pool: PgPool) {
    let repo = PgShortcodeRepository::new(Arc::new(pool));

    repo.insert_if_absent(new_shortcode("asd148", "https://example.com"))
        .await
        .unwrap();
    let second = repo
        .insert_if_absent(new_shortcode("asd148", "https://other.example.com"))
        .await
        .unwrap();

    assert!(second.is_none());

    let stored = repo.find_by_shortcode("asd148").await.unwrap().unwrap();
    assert_eq!(stored.url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_find_by_shortcode_not_found(pool: PgPool) {
    let repo = PgShortcodeRepository::new(Arc::new(pool));

    let result = repo.find_by_shortcode("nope00").await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_increment_redirect(pool: PgPool) {
    common::insert_shortcode(&pool, "asd148", "https://example.com").await;
    let repo = PgShortcodeRepository::new(Arc::new(pool));

    repo.increment_redirect("asd148").await.unwrap();
    let record = repo.increment_redirect("asd148").await.unwrap().unwrap();

    assert_eq!(record.redirect_count, 2);
    assert!(record.redirect_last.is_some());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_increment_redirect_unknown(pool: PgPool) {
    let repo = PgShortcodeRepository::new(Arc::new(pool));

    assert!(repo.increment_redirect("nope00").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_summary(pool: PgPool) {
    common::insert_shortcode(&pool, "aaaaaa", "https://a.example.com").await;
    common::insert_shortcode(&pool, "bbbbbb", "https://b.example.com").await;
    let repo = PgShortcodeRepository::new(Arc::new(pool));

    repo.increment_redirect("aaaaaa").await.unwrap();
    repo.increment_redirect("aaaaaa").await.unwrap();

    let summary = repo.summary().await.unwrap();
    assert_eq!(summary.shortcodes, 2);
    assert_eq!(summary.redirects, 2);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_summary_empty(pool: PgPool) {
    let repo = PgShortcodeRepository::new(Arc::new(pool));

    let summary = repo.summary().await.unwrap();
    assert_eq!(summary.shortcodes, 0);
    assert_eq!(summary.redirects, 0);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_service_shorten_and_redirect(pool: PgPool) {
    let service = common::create_pg_service(pool);

    service
        .shorten(Some("https://example.com".to_string()), Some("asd148".to_string()))
        .await
        .unwrap();

    let url = service.redirect("asd148").await.unwrap();
    assert_eq!(url, "https://example.com");

    let stats = service.stats("asd148").await.unwrap();
    assert_eq!(stats.redirect_count, 1);

    let duplicate = service
        .shorten(Some("https://example.com".to_string()), Some("asd148".to_string()))
        .await;
    assert!(matches!(duplicate, Err(AppError::ShortcodeConflict { .. })));
}
