//! REST API request/response types for Kult.
//!
//! JSON uses camelCase (`walletAddress`, `publicationYear`, `addedAt`) while
//! the database uses snake_case; the translation happens here. Request
//! fields are all optional at the serde level so that a missing field is
//! reported as a validation error with our own message rather than as a
//! deserialization failure.

use chrono::{DateTime, Utc};
use kult_common::{ArtworkKind, KindError, normalize_rating};
use serde::{Deserialize, Serialize};

use crate::db::{ArtworkRow, NewArtwork, UserRow};
use crate::error::ApiError;

const ARTWORK_FIELDS_REQUIRED: &str = "Required fields missing: wallet address, name, author, publication year, and type are required";
const UPDATE_FIELDS_REQUIRED: &str = "Required fields missing: id, wallet address, name, author, publication year, and type are required";

/// Request to create (or confirm) a user.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub wallet_address: Option<String>,
}

/// Query parameters carrying a wallet address.
#[derive(Debug, Default, Deserialize)]
pub struct AddressQuery {
    #[serde(default)]
    pub address: Option<String>,
}

/// Query parameters for listing artworks.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub address: Option<String>,
    /// Exact kind filter
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Editable artwork fields as received.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publication_year: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
}

/// Request to add an artwork.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddArtworkRequest {
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(flatten)]
    pub fields: ArtworkFields,
}

/// Request to replace an artwork's editable fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtworkRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(flatten)]
    pub fields: ArtworkFields,
}

/// Request to delete an artwork.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteArtworkRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub wallet_address: Option<String>,
}

/// Treat absent, empty and whitespace-only strings alike.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ArtworkFields {
    /// Validate into storable fields. `missing` is the message used when a
    /// required field is absent.
    fn validate(self, missing: &str) -> Result<NewArtwork, ApiError> {
        let (Some(name), Some(author), Some(year), Some(kind)) = (
            non_empty(self.name),
            non_empty(self.author),
            self.publication_year.filter(|&y| y != 0),
            non_empty(self.kind),
        ) else {
            return Err(ApiError::Validation(missing.to_string()));
        };

        let publication_year = i32::try_from(year)
            .map_err(|_| ApiError::Validation(format!("publication year out of range: {}", year)))?;
        let kind: ArtworkKind = kind
            .parse()
            .map_err(|e: KindError| ApiError::Validation(e.to_string()))?;
        let rating =
            normalize_rating(self.rating).map_err(|e| ApiError::Validation(e.to_string()))?;

        Ok(NewArtwork {
            name,
            author,
            publication_year,
            kind,
            description: non_empty(self.description),
            rating,
        })
    }
}

impl AddArtworkRequest {
    /// Validate, returning the owner address and the artwork to insert.
    pub fn validate(self) -> Result<(String, NewArtwork), ApiError> {
        let owner = non_empty(self.wallet_address)
            .ok_or_else(|| ApiError::Validation(ARTWORK_FIELDS_REQUIRED.to_string()))?;
        let artwork = self.fields.validate(ARTWORK_FIELDS_REQUIRED)?;
        Ok((owner, artwork))
    }
}

impl UpdateArtworkRequest {
    /// Validate, returning the artwork id, owner address and new fields.
    pub fn validate(self) -> Result<(i64, String, NewArtwork), ApiError> {
        let (Some(id), Some(owner)) = (self.id, non_empty(self.wallet_address)) else {
            return Err(ApiError::Validation(UPDATE_FIELDS_REQUIRED.to_string()));
        };
        let artwork = self.fields.validate(UPDATE_FIELDS_REQUIRED)?;
        Ok((id, owner, artwork))
    }
}

impl DeleteArtworkRequest {
    /// Validate, returning the artwork id and owner address.
    pub fn validate(self) -> Result<(i64, String), ApiError> {
        match (self.id, non_empty(self.wallet_address)) {
            (Some(id), Some(owner)) => Ok((id, owner)),
            _ => Err(ApiError::Validation(
                "Artwork ID and wallet address are required".to_string(),
            )),
        }
    }
}

/// User as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub wallet_address: String,
    pub paying: bool,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            wallet_address: row.wallet_address,
            paying: row.paying,
        }
    }
}

/// Response to `POST /user/create`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exists: bool,
}

/// Response to `GET /user/check`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckUserResponse {
    pub exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paying: Option<bool>,
}

/// Artwork as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkResponse {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub publication_year: i32,
    #[serde(rename = "type")]
    pub kind: ArtworkKind,
    pub description: Option<String>,
    pub rating: Option<i16>,
    pub added_at: DateTime<Utc>,
}

impl TryFrom<ArtworkRow> for ArtworkResponse {
    type Error = String;

    fn try_from(row: ArtworkRow) -> Result<Self, Self::Error> {
        let kind = row.kind_enum().ok_or_else(|| {
            format!("invalid type in database: {} (row {})", row.kind, row.id)
        })?;
        Ok(Self {
            id: row.id,
            name: row.name,
            author: row.author,
            publication_year: row.publication_year,
            kind,
            description: row.description,
            rating: row.rating,
            added_at: row.added_at,
        })
    }
}

/// Response to `POST /artwork/add`.
///
/// Either `artwork` is set (created) or `exists` and `id` are (duplicate).
#[derive(Debug, Serialize, Deserialize)]
pub struct AddArtworkResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<ArtworkResponse>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Response to `GET /artwork/list`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListArtworksResponse {
    pub count: usize,
    pub artworks: Vec<ArtworkResponse>,
}

/// Response carrying a single artwork.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArtworkEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub artwork: ArtworkResponse,
}

/// Plain acknowledgement.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
