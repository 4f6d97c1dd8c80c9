//! REST API handlers for Kult.
//!
//! Extractor rejections are taken as `Result`s and converted with `?`, so a
//! malformed body or query still answers with the `{ "error": ... }` shape.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use kult_common::{ArtworkKind, ShareLinks, ShareMetadata, ShareSubject};
use sqlx::PgPool;
use tracing::{debug, error, info};

use crate::api::types::*;
use crate::config::Config;
use crate::db::{self, ArtworkInsert, ArtworkRow, UserInsert};
use crate::error::{ApiError, Result};

/// Shared state for handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
}

fn to_response(row: ArtworkRow) -> Result<ArtworkResponse> {
    let id = row.id;
    row.try_into().map_err(|e| {
        error!("Data integrity error: failed to convert ArtworkRow {} to response: {}", id, e);
        ApiError::Internal(format!("database contains invalid artwork record {}: {}", id, e))
    })
}

/// Health check endpoint.
///
/// # Endpoint
/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Create a user on first sight.
///
/// # Endpoint
/// `POST /user/create`
///
/// # Returns
/// - `200 OK` with the new user, or with `exists: true` if the address is
///   already known (not an error)
/// - `400 Bad Request` if `walletAddress` is missing
pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<CreateUserResponse>> {
    let Json(req) = payload?;
    let address = non_empty(req.wallet_address)
        .ok_or_else(|| ApiError::Validation("Wallet address is required".to_string()))?;

    let response = match db::ensure_user(&state.pool, &address).await? {
        UserInsert::Created(row) => {
            info!("Created user {}", row.wallet_address);
            CreateUserResponse {
                message: "User created successfully".to_string(),
                user: Some(row.into()),
                exists: false,
            }
        }
        UserInsert::AlreadyExists => CreateUserResponse {
            message: "User already exists".to_string(),
            user: None,
            exists: true,
        },
    };
    Ok(Json(response))
}

/// Check whether a user exists.
///
/// # Endpoint
/// `GET /user/check?address=`
///
/// # Returns
/// - `200 OK` with `{exists: false}` or `{exists: true, paying}`
/// - `400 Bad Request` if `address` is missing
pub async fn check_user(
    State(state): State<AppState>,
    query: std::result::Result<Query<AddressQuery>, QueryRejection>,
) -> Result<Json<CheckUserResponse>> {
    let Query(query) = query?;
    let address = non_empty(query.address)
        .ok_or_else(|| ApiError::Validation("Address is required".to_string()))?;

    let response = match db::get_user(&state.pool, &address).await? {
        Some(user) => CheckUserResponse {
            exists: true,
            paying: Some(user.paying),
        },
        None => CheckUserResponse {
            exists: false,
            paying: None,
        },
    };
    Ok(Json(response))
}

/// Add an artwork to a user's collection.
///
/// # Endpoint
/// `POST /artwork/add`
///
/// # Steps
/// 1. Validates required fields, kind and rating
/// 2. Requires an existing user record for `walletAddress` (never created here)
/// 3. Inserts unless the owner already has the same name + author
///
/// # Returns
/// - `200 OK` with the created artwork, or `{exists: true, id}` for a duplicate
/// - `400 Bad Request` for validation errors
/// - `404 Not Found` if the user does not exist
pub async fn add_artwork(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddArtworkRequest>, JsonRejection>,
) -> Result<Json<AddArtworkResponse>> {
    let Json(req) = payload?;
    let (owner, artwork) = req.validate()?;

    if db::get_user(&state.pool, &owner).await?.is_none() {
        return Err(ApiError::NotFound(db::USER_NOT_FOUND.to_string()));
    }

    let response = match db::insert_artwork(&state.pool, &owner, &artwork).await? {
        ArtworkInsert::Created(row) => {
            info!("Added artwork {} for {}", row.id, owner);
            AddArtworkResponse {
                message: "Artwork added successfully".to_string(),
                artwork: Some(to_response(row)?),
                exists: false,
                id: None,
            }
        }
        ArtworkInsert::AlreadyExists { id } => {
            debug!("Artwork {} already in collection of {}", id, owner);
            AddArtworkResponse {
                message: "You already have this artwork in your collection".to_string(),
                artwork: None,
                exists: true,
                id: Some(id),
            }
        }
    };
    Ok(Json(response))
}

/// List a user's artworks, newest first.
///
/// # Endpoint
/// `GET /artwork/list?address=&type=`
///
/// # Returns
/// - `200 OK` with `{count, artworks}` (possibly empty)
/// - `400 Bad Request` if `address` is missing
///
/// An unknown `type` filter yields an empty list.
pub async fn list_artworks(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListArtworksResponse>> {
    let Query(query) = query?;
    let owner = non_empty(query.address)
        .ok_or_else(|| ApiError::Validation("Wallet address is required".to_string()))?;
    let kind = match non_empty(query.kind).map(|k| k.parse::<ArtworkKind>()) {
        None => None,
        Some(Ok(kind)) => Some(kind),
        // An unknown type matches no stored artwork.
        Some(Err(e)) => {
            debug!("List filter for {} matches nothing: {}", owner, e);
            return Ok(Json(ListArtworksResponse {
                count: 0,
                artworks: Vec::new(),
            }));
        }
    };

    let artworks = db::list_artworks(&state.pool, &owner, kind)
        .await?
        .into_iter()
        .map(to_response)
        .collect::<Result<Vec<_>>>()?;

    Ok(Json(ListArtworksResponse {
        count: artworks.len(),
        artworks,
    }))
}

/// Public, read-only view of one artwork.
///
/// # Endpoint
/// `GET /artwork/shared/{id}`
///
/// Ownership is not checked: anyone with the id can read the artwork.
///
/// # Returns
/// - `200 OK` with `{artwork}`
/// - `400 Bad Request` if the id is not a number
/// - `404 Not Found` if no artwork has this id
pub async fn get_shared_artwork(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<ArtworkEnvelope>> {
    let Path(id) = id?;
    let row = db::get_artwork_by_id(&state.pool, id).await?;
    Ok(Json(ArtworkEnvelope {
        message: None,
        artwork: to_response(row)?,
    }))
}

/// Public link and QR-code URL for an artwork.
///
/// # Endpoint
/// `GET /artwork/shared/{id}/links`
///
/// # Returns
/// - `200 OK` with `{shareUrl, qrCodeUrl}`
/// - `404 Not Found` if no artwork has this id
pub async fn get_share_links(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<ShareLinks>> {
    let Path(id) = id?;
    let row = db::get_artwork_by_id(&state.pool, id).await?;
    Ok(Json(ShareLinks::new(&state.config.share, row.id)))
}

/// Link-preview metadata for the public page of an artwork.
///
/// # Endpoint
/// `GET /artwork/shared/{id}/metadata`
///
/// Unknown ids get generic metadata rather than an error so that link
/// previews always render.
pub async fn get_share_metadata(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<ShareMetadata>> {
    let Path(id) = id?;
    let share = &state.config.share;

    let row = match db::get_artwork_by_id(&state.pool, id).await {
        Ok(row) => row,
        Err(ApiError::NotFound(_)) => return Ok(Json(ShareMetadata::fallback(share, id))),
        Err(e) => return Err(e),
    };

    let metadata = match row.kind_enum() {
        Some(kind) => ShareMetadata::for_artwork(
            share,
            &ShareSubject {
                id: row.id,
                name: &row.name,
                author: &row.author,
                kind,
                publication_year: row.publication_year,
                description: row.description.as_deref(),
            },
        ),
        None => ShareMetadata::fallback(share, id),
    };
    Ok(Json(metadata))
}

/// Replace an owned artwork's editable fields.
///
/// # Endpoint
/// `PUT /artwork/update`
///
/// # Returns
/// - `200 OK` with `{message, artwork}` reflecting the new values
/// - `400 Bad Request` for validation errors
/// - `404 Not Found` if the artwork does not exist or belongs to someone else
pub async fn update_artwork(
    State(state): State<AppState>,
    payload: std::result::Result<Json<UpdateArtworkRequest>, JsonRejection>,
) -> Result<Json<ArtworkEnvelope>> {
    let Json(req) = payload?;
    let (id, owner, artwork) = req.validate()?;

    let row = db::update_artwork(&state.pool, id, &owner, &artwork).await?;
    Ok(Json(ArtworkEnvelope {
        message: Some("Artwork updated successfully".to_string()),
        artwork: to_response(row)?,
    }))
}

/// Permanently delete an owned artwork.
///
/// # Endpoint
/// `DELETE /artwork/delete`
///
/// # Returns
/// - `200 OK` with `{message}`
/// - `400 Bad Request` if `id` or `walletAddress` is missing
/// - `404 Not Found` if the artwork does not exist or belongs to someone else
pub async fn delete_artwork(
    State(state): State<AppState>,
    payload: std::result::Result<Json<DeleteArtworkRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(req) = payload?;
    let (id, owner) = req.validate()?;

    db::delete_artwork(&state.pool, id, &owner).await?;
    info!("Deleted artwork {} of {}", id, owner);

    Ok(Json(MessageResponse {
        message: "Artwork deleted successfully".to_string(),
    }))
}
