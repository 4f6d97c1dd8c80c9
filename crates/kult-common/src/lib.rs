//! Shared domain types for Kult.
//!
//! Used by both the API server and the CLI so that artwork kinds, rating
//! bounds and share links are defined in exactly one place.

pub mod artwork;
pub mod config;
pub mod share;

pub use artwork::{ArtworkKind, KindError, RATING_MAX, RATING_MIN, RatingError, normalize_rating};
pub use config::ShareSettings;
pub use share::{SITE_NAME, ShareLinks, ShareMetadata, ShareSubject};
