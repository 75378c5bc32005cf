//! Bookshelf Record-Keeping Service
//!
//! A Rust implementation of the bookshelf record-keeping server, providing a
//! REST JSON API over an in-memory catalog of book records.

use std::sync::Arc;

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
