//! Database queries for Kult.
//!
//! Every artwork mutation is scoped by owner in the statement itself, so an
//! artwork that exists under another owner is indistinguishable from one
//! that does not exist at all.

use kult_common::ArtworkKind;
use sqlx::PgPool;
use sqlx::error::DatabaseError;

use crate::db::models::{ArtworkRow, NewArtwork, UserRow};
use crate::error::{ApiError, Result};

/// Returned when adding for an address with no user record.
pub const USER_NOT_FOUND: &str = "User does not exist. Please connect your wallet first.";

/// Returned when a shared artwork id matches nothing.
pub const ARTWORK_NOT_FOUND: &str = "Artwork not found";

/// Returned for updates of missing or foreign artworks.
pub const EDIT_NOT_FOUND: &str = "Artwork not found or you do not have permission to edit it";

/// Returned for deletes of missing or foreign artworks.
pub const DELETE_NOT_FOUND: &str = "Artwork not found or you do not have permission to delete it";

/// Returned when an update would collide with another owned artwork.
pub const DUPLICATE_ARTWORK: &str = "You already have an artwork with this name and author";

/// Outcome of [`ensure_user`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInsert {
    Created(UserRow),
    AlreadyExists,
}

/// Outcome of [`insert_artwork`].
#[derive(Debug, Clone)]
pub enum ArtworkInsert {
    Created(ArtworkRow),
    /// The owner already has an artwork with the same name and author.
    AlreadyExists { id: i64 },
}

fn is_owner_name_author_conflict(db_err: &dyn DatabaseError) -> bool {
    db_err.is_unique_violation()
        && db_err
            .constraint()
            .is_some_and(|constraint| constraint.contains("owner_name_author"))
}

/// Create a user record if none exists for `wallet_address`.
///
/// Single `INSERT .. ON CONFLICT DO NOTHING`, so concurrent calls for the
/// same new address produce exactly one row and every caller succeeds.
pub async fn ensure_user(pool: &PgPool, wallet_address: &str) -> Result<UserInsert> {
    let result = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (wallet_address, paying)
        VALUES ($1, FALSE)
        ON CONFLICT (wallet_address) DO NOTHING
        RETURNING wallet_address, paying
        "#,
    )
    .bind(wallet_address)
    .fetch_optional(pool)
    .await;

    match result {
        Ok(Some(row)) => Ok(UserInsert::Created(row)),
        Ok(None) => Ok(UserInsert::AlreadyExists),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Ok(UserInsert::AlreadyExists)
        }
        Err(e) => Err(ApiError::Database(e)),
    }
}

/// Get a user by wallet address.
pub async fn get_user(pool: &PgPool, wallet_address: &str) -> Result<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT wallet_address, paying FROM users WHERE wallet_address = $1",
    )
    .bind(wallet_address)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Insert an artwork unless the owner already has one with the same name
/// and author.
///
/// Returns `NotFound` if the owner has no user record.
pub async fn insert_artwork(
    pool: &PgPool,
    owner: &str,
    artwork: &NewArtwork,
) -> Result<ArtworkInsert> {
    let result = sqlx::query_as::<_, ArtworkRow>(
        r#"
        INSERT INTO artworks (
            user_wallet_address, name, author, publication_year,
            type, description, rating
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (user_wallet_address, name, author) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(owner)
    .bind(&artwork.name)
    .bind(&artwork.author)
    .bind(artwork.publication_year)
    .bind(artwork.kind.as_str())
    .bind(&artwork.description)
    .bind(artwork.rating)
    .fetch_optional(pool)
    .await;

    match result {
        Ok(Some(row)) => return Ok(ArtworkInsert::Created(row)),
        Ok(None) => {}
        Err(sqlx::Error::Database(db_err)) => {
            if db_err.is_foreign_key_violation() {
                return Err(ApiError::NotFound(USER_NOT_FOUND.to_string()));
            }
            if !is_owner_name_author_conflict(&*db_err) {
                return Err(ApiError::Database(sqlx::Error::Database(db_err)));
            }
        }
        Err(e) => return Err(ApiError::Database(e)),
    }

    // Conflict: report the row that won.
    find_artwork_id(pool, owner, &artwork.name, &artwork.author)
        .await?
        .map(|id| ArtworkInsert::AlreadyExists { id })
        .ok_or_else(|| {
            ApiError::Internal(format!(
                "artwork ({}, {}) for {} conflicted on insert but is gone",
                artwork.name, artwork.author, owner
            ))
        })
}

/// Find the id of an owner's artwork by name and author.
pub async fn find_artwork_id(
    pool: &PgPool,
    owner: &str,
    name: &str,
    author: &str,
) -> Result<Option<i64>> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT id FROM artworks
        WHERE user_wallet_address = $1 AND name = $2 AND author = $3
        "#,
    )
    .bind(owner)
    .bind(name)
    .bind(author)
    .fetch_optional(pool)
    .await?;
    Ok(id)
}

/// List an owner's artworks, newest first, optionally restricted to one kind.
pub async fn list_artworks(
    pool: &PgPool,
    owner: &str,
    kind: Option<ArtworkKind>,
) -> Result<Vec<ArtworkRow>> {
    let rows = sqlx::query_as::<_, ArtworkRow>(
        r#"
        SELECT * FROM artworks
        WHERE user_wallet_address = $1
          AND ($2::TEXT IS NULL OR type = $2)
        ORDER BY added_at DESC, id DESC
        "#,
    )
    .bind(owner)
    .bind(kind.map(|k| k.as_str()))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Get an artwork by ID, whoever owns it.
pub async fn get_artwork_by_id(pool: &PgPool, id: i64) -> Result<ArtworkRow> {
    sqlx::query_as::<_, ArtworkRow>("SELECT * FROM artworks WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(ARTWORK_NOT_FOUND.to_string()))
}

/// Replace every editable field of an owned artwork.
///
/// `id` and `added_at` are never changed.
pub async fn update_artwork(
    pool: &PgPool,
    id: i64,
    owner: &str,
    artwork: &NewArtwork,
) -> Result<ArtworkRow> {
    let result = sqlx::query_as::<_, ArtworkRow>(
        r#"
        UPDATE artworks
        SET name = $3,
            author = $4,
            publication_year = $5,
            type = $6,
            description = $7,
            rating = $8
        WHERE id = $1 AND user_wallet_address = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(owner)
    .bind(&artwork.name)
    .bind(&artwork.author)
    .bind(artwork.publication_year)
    .bind(artwork.kind.as_str())
    .bind(&artwork.description)
    .bind(artwork.rating)
    .fetch_optional(pool)
    .await;

    match result {
        Ok(Some(row)) => Ok(row),
        Ok(None) => Err(ApiError::NotFound(EDIT_NOT_FOUND.to_string())),
        Err(sqlx::Error::Database(db_err)) if is_owner_name_author_conflict(&*db_err) => {
            Err(ApiError::Validation(DUPLICATE_ARTWORK.to_string()))
        }
        Err(e) => Err(ApiError::Database(e)),
    }
}

/// Permanently delete an owned artwork.
pub async fn delete_artwork(pool: &PgPool, id: i64, owner: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM artworks WHERE id = $1 AND user_wallet_address = $2")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(DELETE_NOT_FOUND.to_string()));
    }
    Ok(())
}
