//! Lending transaction model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Lifecycle state of a lending transaction
///
/// Transitions are strictly forward: `pending -> borrowed -> returned ->
/// turned-over`. `turned-over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionStatus {
    Pending,
    Borrowed,
    Returned,
    TurnedOver,
}

impl TransactionStatus {
    /// A transaction still holds its quantity reservation until it is
    /// turned over.
    pub fn is_open(self) -> bool {
        !matches!(self, TransactionStatus::TurnedOver)
    }
}

/// A single lending transaction against one tool
///
/// The tool and instructor names are denormalized at creation time so the
/// record stays renderable even if the referenced rows are later removed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    /// Identifier in `TRK-######` format; also the QR code payload
    pub id: String,
    pub tool_id: String,
    pub tool_name: String,
    /// Blank until the borrowing student completes identification
    pub student_name: String,
    pub student_id: String,
    pub section: String,
    pub instructor_name: String,
    pub instructor_id: String,
    pub borrowed_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub turned_over_at: Option<DateTime<Utc>>,
    pub status: TransactionStatus,
    pub due_date: DateTime<Utc>,
    pub quantity: u32,
}

/// Issue request opening a pending transaction
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTransaction {
    #[validate(length(min = 1))]
    pub tool_id: String,
    #[validate(length(min = 1))]
    pub instructor_name: String,
    #[validate(length(min = 1))]
    pub instructor_id: String,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Student identification completing a pending transaction
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CompleteTransaction {
    #[validate(length(min = 1))]
    pub student_name: String,
    #[validate(length(min = 1))]
    pub student_id: String,
    #[validate(length(min = 1))]
    pub section: String,
}

/// Query parameters for transaction listings
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TransactionQuery {
    /// Restrict to transactions owned by this instructor
    pub instructor_id: Option<String>,
    /// Restrict to a single lifecycle state
    pub status: Option<TransactionStatus>,
}
