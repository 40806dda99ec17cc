//! API handlers for ToolTrack REST endpoints

pub mod borrowers;
pub mod health;
pub mod instructors;
pub mod openapi;
pub mod stats;
pub mod tools;
pub mod transactions;
pub mod users;

use serde::Serialize;
use utoipa::ToSchema;

/// Generic acknowledgement body for mutation endpoints
#[derive(Serialize, ToSchema)]
pub struct StatusMessage {
    /// Machine-readable outcome
    pub status: String,
    /// Human-readable summary
    pub message: String,
}

impl StatusMessage {
    pub fn new(status: &str, message: impl Into<String>) -> Self {
        Self {
            status: status.to_string(),
            message: message.into(),
        }
    }
}
