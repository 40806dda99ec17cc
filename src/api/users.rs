//! Administrative user endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User},
};

use super::StatusMessage;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "User accounts", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<crate::AppState>) -> Json<Vec<User>> {
    Json(state.services.users.list().await)
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User account", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    state
        .services
        .users
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
}

/// Create a user account
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    request.validate()?;
    let user = state.services.users.create(request).await;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user account
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    request.validate()?;
    state
        .services
        .users
        .update(&id, request)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
}

/// Delete a user account
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User removed", body = StatusMessage),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<StatusMessage>> {
    if state.services.users.delete(&id).await {
        Ok(Json(StatusMessage::new("removed", format!("User {} removed", id))))
    } else {
        Err(AppError::NotFound(format!("User {} not found", id)))
    }
}
