//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Open transaction counts by lifecycle state
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct TransactionCounts {
    pub pending: usize,
    pub borrowed: usize,
    pub returned: usize,
    pub turned_over: usize,
}

/// Dashboard counters
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Number of tool records
    pub tool_count: usize,
    /// Sum of total quantities across tools
    pub total_quantity: u32,
    /// Sum of available quantities across tools
    pub available_quantity: u32,
    pub transactions: TransactionCounts,
    /// Borrowed transactions whose due date has passed
    pub overdue_count: usize,
    pub borrower_count: usize,
    pub instructor_count: usize,
}

/// Dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard counters", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> Json<StatsResponse> {
    Json(state.services.stats.overview().await)
}
