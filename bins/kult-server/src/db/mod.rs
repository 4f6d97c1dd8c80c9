//! Database layer for Kult.

mod models;
mod pool;
mod queries;

pub use models::{ArtworkRow, NewArtwork, UserRow};
pub use pool::create_pool;
pub use queries::*;
