//! Tool inventory model and related types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Availability flag set on a tool record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Available,
    Unavailable,
}

/// Physical condition of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCondition {
    Good,
    Fair,
    NeedsRepair,
}

/// Tool record owned by an instructor
///
/// `available_qty` is the quantity not currently held against open
/// transactions. It is mutated only through the reservation protocol
/// of the inventory store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub image: String,
    pub total_qty: u32,
    pub available_qty: u32,
    pub status: ToolStatus,
    pub condition: ToolCondition,
    pub instructor_id: String,
}

/// Create tool request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTool {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default)]
    pub image: String,
    pub total_qty: u32,
    /// Defaults to `total_qty` when omitted
    pub available_qty: Option<u32>,
    pub status: Option<ToolStatus>,
    pub condition: Option<ToolCondition>,
    #[validate(length(min = 1))]
    pub instructor_id: String,
}

/// Update tool request (partial)
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTool {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub total_qty: Option<u32>,
    pub available_qty: Option<u32>,
    pub status: Option<ToolStatus>,
    pub condition: Option<ToolCondition>,
    pub instructor_id: Option<String>,
}

/// Query parameters for tool listings
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ToolQuery {
    /// Restrict to tools owned by this instructor
    pub instructor_id: Option<String>,
}
