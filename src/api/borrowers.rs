//! Borrower directory endpoints

use axum::{extract::State, Json};

use crate::models::Borrower;

/// List every student who has ever borrowed, newest first
#[utoipa::path(
    get,
    path = "/borrowers",
    tag = "borrowers",
    responses(
        (status = 200, description = "Borrower directory, newest first", body = Vec<Borrower>)
    )
)]
pub async fn list_borrowers(State(state): State<crate::AppState>) -> Json<Vec<Borrower>> {
    Json(state.services.users.borrowers().await)
}
