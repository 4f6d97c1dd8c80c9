//! API types for server communication.

use kult_common::ArtworkKind;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// User record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub wallet_address: String,
    pub paying: bool,
}

/// Create user request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub wallet_address: String,
}

/// Create user response. `exists` is set when the user was already known.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserResponse {
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub exists: bool,
}

/// Check user response.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckUserResponse {
    pub exists: bool,
    #[serde(default)]
    pub paying: Option<bool>,
}

/// Artwork as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub publication_year: i32,
    #[serde(rename = "type")]
    pub kind: ArtworkKind,
    pub description: Option<String>,
    pub rating: Option<i16>,
    pub added_at: String,
}

impl Artwork {
    /// Editable fields, e.g. to add this artwork to another collection.
    pub fn to_input(&self) -> ArtworkInput {
        ArtworkInput {
            name: self.name.clone(),
            author: self.author.clone(),
            publication_year: self.publication_year,
            kind: self.kind,
            description: self.description.clone(),
            rating: self.rating,
        }
    }
}

/// Editable artwork fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkInput {
    pub name: String,
    pub author: String,
    pub publication_year: i32,
    #[serde(rename = "type")]
    pub kind: ArtworkKind,
    pub description: Option<String>,
    pub rating: Option<i16>,
}

/// Add artwork request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddArtworkRequest<'a> {
    pub wallet_address: &'a str,
    #[serde(flatten)]
    pub artwork: &'a ArtworkInput,
}

/// Raw add artwork response.
#[derive(Debug, Clone, Deserialize)]
pub struct AddArtworkResponse {
    pub message: String,
    #[serde(default)]
    pub artwork: Option<Artwork>,
    #[serde(default)]
    pub exists: bool,
    #[serde(default)]
    pub id: Option<i64>,
}

/// Result of adding an artwork.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(Artwork),
    /// The collection already held an artwork with this name and author.
    AlreadyOwned { id: i64 },
}

/// Update artwork request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtworkRequest<'a> {
    pub id: i64,
    pub wallet_address: &'a str,
    #[serde(flatten)]
    pub artwork: &'a ArtworkInput,
}

/// Delete artwork request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteArtworkRequest<'a> {
    pub id: i64,
    pub wallet_address: &'a str,
}

/// Artwork list response.
#[derive(Debug, Clone, Deserialize)]
pub struct ListArtworksResponse {
    pub count: usize,
    pub artworks: Vec<Artwork>,
}

/// Response carrying a single artwork.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub artwork: Artwork,
}

/// Plain acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
