//! Database models for Kult.

use chrono::{DateTime, Utc};
use kult_common::ArtworkKind;

/// Database row for a user.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRow {
    /// Wallet address, exactly as issued by the wallet provider
    pub wallet_address: String,

    /// Paid-plan flag. Not changed by any endpoint.
    pub paying: bool,
}

/// Database row for an artwork.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArtworkRow {
    pub id: i64,

    /// Owner's wallet address
    pub user_wallet_address: String,

    pub name: String,

    /// Creator of the referenced work (not the owner)
    pub author: String,

    pub publication_year: i32,

    /// Lowercase kind name; see [`ArtworkKind`]
    #[sqlx(rename = "type")]
    pub kind: String,

    pub description: Option<String>,

    /// 1-5, or NULL when unrated
    pub rating: Option<i16>,

    /// Assigned by the database on insert
    pub added_at: DateTime<Utc>,
}

impl ArtworkRow {
    /// Parse the stored kind.
    pub fn kind_enum(&self) -> Option<ArtworkKind> {
        self.kind.parse().ok()
    }
}

/// Validated editable fields of an artwork.
///
/// Used for both inserts and full-replace updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtwork {
    pub name: String,
    pub author: String,
    pub publication_year: i32,
    pub kind: ArtworkKind,
    pub description: Option<String>,
    pub rating: Option<i16>,
}
