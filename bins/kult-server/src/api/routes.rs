//! REST API routes for Kult.

use axum::Router;
use axum::routing::{delete, get, post, put};

use super::handlers::{
    AppState, add_artwork, check_user, create_user, delete_artwork, get_share_links,
    get_share_metadata, get_shared_artwork, health_check, list_artworks, update_artwork,
};

/// Create the REST API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // User endpoints
        .route("/user/create", post(create_user))
        .route("/user/check", get(check_user))
        // Artwork endpoints, owner-scoped
        .route("/artwork/add", post(add_artwork))
        .route("/artwork/list", get(list_artworks))
        .route("/artwork/update", put(update_artwork))
        .route("/artwork/delete", delete(delete_artwork))
        // Public sharing
        .route("/artwork/shared/{id}", get(get_shared_artwork))
        .route("/artwork/shared/{id}/links", get(get_share_links))
        .route("/artwork/shared/{id}/metadata", get(get_share_metadata))
        .with_state(state)
}
