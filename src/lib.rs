//! ToolTrack Workshop Lending Tracker
//!
//! A Rust server for tracking tool lending in a training workshop:
//! instructors issue tools from their inventories, students borrow them
//! against the instructor's shift, and returned tools are periodically
//! turned over to an administrator.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod shift;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
