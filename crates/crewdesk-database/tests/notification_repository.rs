//! Repository tests that run against a live PostgreSQL instance.
//!
//! Gated behind the `db-tests` feature; run with
//! `cargo test -p crewdesk-database --features db-tests` and a
//! `DATABASE_URL` pointing at a test database.
#![cfg(feature = "db-tests")]

use chrono::{Duration, Utc};
use sqlx::PgPool;

use crewdesk_core::error::ErrorKind;
use crewdesk_database::repositories::notification::NotificationRepository;
use crewdesk_entity::notification::request::NotificationRequest;

#[sqlx::test(migrations = "../../migrations")]
async fn test_mark_read_is_idempotent(pool: PgPool) {
    let repo = NotificationRepository::new(pool);
    let created = repo
        .create(&NotificationRequest::new(1, "TEAM", "hello").with_team(7))
        .await
        .unwrap();
    assert!(!created.is_read);
    assert!(created.read_at.is_none());

    let first = repo.mark_read(created.id).await.unwrap();
    assert!(first.is_read);
    let read_at = first.read_at.expect("read_at set on first transition");

    // Re-marking is a no-op: same row back, read_at unchanged.
    let second = repo.mark_read(created.id).await.unwrap();
    assert!(second.is_read);
    assert_eq!(second.read_at, Some(read_at));

    assert_eq!(repo.count_unread(1).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_mark_read_missing_id_is_not_found(pool: PgPool) {
    let repo = NotificationRepository::new(pool);
    let err = repo.mark_read(999_999).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_purge_spares_unread_and_recent_rows(pool: PgPool) {
    let repo = NotificationRepository::new(pool.clone());

    let old_read = repo
        .create(&NotificationRequest::new(1, "TEAM", "old and read"))
        .await
        .unwrap();
    repo.mark_read(old_read.id).await.unwrap();
    sqlx::query("UPDATE notifications SET read_at = $1 WHERE id = $2")
        .bind(Utc::now() - Duration::days(31))
        .bind(old_read.id)
        .execute(&pool)
        .await
        .unwrap();

    let fresh_read = repo
        .create(&NotificationRequest::new(1, "TEAM", "read today"))
        .await
        .unwrap();
    repo.mark_read(fresh_read.id).await.unwrap();

    let old_unread = repo
        .create(&NotificationRequest::new(1, "TEAM", "old but unread"))
        .await
        .unwrap();

    let cutoff = Utc::now() - Duration::days(30);
    let purged = repo.delete_old_read(cutoff).await.unwrap();
    assert_eq!(purged, 1);

    assert!(repo.find_by_id(old_read.id).await.unwrap().is_none());
    assert!(repo.find_by_id(fresh_read.id).await.unwrap().is_some());
    assert!(repo.find_by_id(old_unread.id).await.unwrap().is_some());
}
