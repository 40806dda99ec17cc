//! Instructor registry endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::instructor::{CreateInstructor, Instructor, UpdateShiftTime},
    models::Transaction,
};

use super::StatusMessage;

/// List all instructors
#[utoipa::path(
    get,
    path = "/instructors",
    tag = "instructors",
    responses(
        (status = 200, description = "Instructor registry", body = Vec<Instructor>)
    )
)]
pub async fn list_instructors(State(state): State<crate::AppState>) -> Json<Vec<Instructor>> {
    Json(state.services.instructors.list().await)
}

/// Get an instructor by id
#[utoipa::path(
    get,
    path = "/instructors/{id}",
    tag = "instructors",
    params(("id" = String, Path, description = "Instructor ID")),
    responses(
        (status = 200, description = "Instructor record", body = Instructor),
        (status = 404, description = "Instructor not found")
    )
)]
pub async fn get_instructor(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Instructor>> {
    state
        .services
        .instructors
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Instructor {} not found", id)))
}

/// Register an instructor
#[utoipa::path(
    post,
    path = "/instructors",
    tag = "instructors",
    request_body = CreateInstructor,
    responses(
        (status = 201, description = "Instructor registered", body = Instructor),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_instructor(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateInstructor>,
) -> AppResult<(StatusCode, Json<Instructor>)> {
    request.validate()?;
    let instructor = state.services.instructors.create(request).await;
    Ok((StatusCode::CREATED, Json(instructor)))
}

/// Change an instructor's shift end time
///
/// Due dates of that instructor's borrowed and returned transactions are
/// recomputed from each transaction's own borrow date.
#[utoipa::path(
    put,
    path = "/instructors/{id}/shift-time",
    tag = "instructors",
    params(("id" = String, Path, description = "Instructor ID")),
    request_body = UpdateShiftTime,
    responses(
        (status = 200, description = "Shift end time updated; no-op for an unknown instructor", body = StatusMessage),
        (status = 400, description = "Invalid time format")
    )
)]
pub async fn update_shift_time(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateShiftTime>,
) -> AppResult<Json<StatusMessage>> {
    request.validate()?;
    state
        .services
        .instructors
        .update_shift_time(&id, &request.shift_end_time)
        .await;
    Ok(Json(StatusMessage::new(
        "updated",
        format!("Shift end time set to {}", request.shift_end_time),
    )))
}

/// List an instructor's returned tools awaiting turnover
#[utoipa::path(
    get,
    path = "/instructors/{id}/returned",
    tag = "instructors",
    params(("id" = String, Path, description = "Instructor ID")),
    responses(
        (status = 200, description = "Returned transactions awaiting turnover", body = Vec<Transaction>)
    )
)]
pub async fn list_returned(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Transaction>> {
    Json(state.services.ledger.returned_by_instructor(&id).await)
}

/// Turn over every returned tool of one instructor in one step
#[utoipa::path(
    post,
    path = "/instructors/{id}/turnover-all",
    tag = "instructors",
    params(("id" = String, Path, description = "Instructor ID")),
    responses(
        (status = 200, description = "All returned tools turned over", body = StatusMessage)
    )
)]
pub async fn turn_over_all(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> Json<StatusMessage> {
    state.services.ledger.mark_all_turned_over(&id).await;
    Json(StatusMessage::new(
        "turned-over",
        "All returned tools marked as turned over to admin",
    ))
}
