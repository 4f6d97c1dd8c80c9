//! Kult API server.
//!
//! A wallet-keyed collection tracker: users record artworks (books, movies,
//! music, ...) they enjoyed, and share single artworks through public links.
//! Exposed as a library so integration tests can build the router directly.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
