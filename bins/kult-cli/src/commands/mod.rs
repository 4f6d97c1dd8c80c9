//! Command implementations.

pub mod artwork;
pub mod config;
pub mod share;
pub mod user;
