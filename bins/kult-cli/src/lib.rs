//! Client library for the Kult CLI.

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod types;
pub mod viewer;
