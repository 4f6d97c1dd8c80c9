//! Concurrency tests for Kult database operations.
//!
//! These tests verify that insert-if-absent holds under concurrent callers.

use kult_common::ArtworkKind;
use kult_server::db::{
    ArtworkInsert, NewArtwork, UserInsert, ensure_user, insert_artwork, list_artworks,
};
use sqlx::PgPool;
use tokio::task::JoinSet;

fn dune() -> NewArtwork {
    NewArtwork {
        name: "Dune".to_string(),
        author: "Herbert".to_string(),
        publication_year: 1965,
        kind: ArtworkKind::Book,
        description: None,
        rating: None,
    }
}

#[sqlx::test]
async fn test_concurrent_ensure_user_same_address(pool: PgPool) {
    // 10 tasks race to create the same user: all succeed, exactly one creates
    let mut tasks = JoinSet::new();

    for _ in 0..10 {
        let pool = pool.clone();
        tasks.spawn(async move { ensure_user(&pool, "0xRace").await });
    }

    let mut created = 0;
    let mut existed = 0;

    while let Some(result) = tasks.join_next().await {
        match result.unwrap() {
            Ok(UserInsert::Created(_)) => created += 1,
            Ok(UserInsert::AlreadyExists) => existed += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(created, 1, "Expected exactly 1 creation");
    assert_eq!(existed, 9, "Expected 9 already-exists outcomes");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE wallet_address = $1")
        .bind("0xRace")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_concurrent_add_same_artwork(pool: PgPool) {
    ensure_user(&pool, "0xA").await.unwrap();

    let mut tasks = JoinSet::new();
    for _ in 0..10 {
        let pool = pool.clone();
        tasks.spawn(async move { insert_artwork(&pool, "0xA", &dune()).await });
    }

    let mut created_ids = Vec::new();
    let mut existing_ids = Vec::new();

    while let Some(result) = tasks.join_next().await {
        match result.unwrap() {
            Ok(ArtworkInsert::Created(row)) => created_ids.push(row.id),
            Ok(ArtworkInsert::AlreadyExists { id }) => existing_ids.push(id),
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(created_ids.len(), 1, "Expected exactly 1 insert");
    assert_eq!(existing_ids.len(), 9);
    assert!(existing_ids.iter().all(|id| *id == created_ids[0]));

    let rows = list_artworks(&pool, "0xA", None).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[sqlx::test]
async fn test_insert_for_unknown_owner_is_not_found(pool: PgPool) {
    let err = insert_artwork(&pool, "0xGhost", &dune()).await.unwrap_err();
    assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
}
