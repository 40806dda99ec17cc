//! Instructor model and related types

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// `HH:mm` shift end times, 24-hour clock
pub static SHIFT_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("invalid shift time pattern")
});

/// Coarse badge derived from an instructor's transaction set
///
/// Never written directly: the status aggregator overwrites it after every
/// ledger mutation touching the instructor's transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum InstructorToolStatus {
    NoTools,
    ToolsInUse,
    AllTurnedOver,
}

/// Instructor record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub tool_status: InstructorToolStatus,
    /// Time of day the instructor's shift ends, `HH:mm`
    pub shift_end_time: String,
}

/// Create instructor request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInstructor {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(regex(path = *SHIFT_TIME_RE))]
    pub shift_end_time: String,
}

/// Shift end time update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateShiftTime {
    #[validate(regex(path = *SHIFT_TIME_RE))]
    pub shift_end_time: String,
}
