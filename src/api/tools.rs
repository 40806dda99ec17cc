//! Tool inventory endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::tool::{CreateTool, Tool, ToolQuery, UpdateTool},
};

use super::StatusMessage;

/// List tools, optionally filtered by owning instructor
#[utoipa::path(
    get,
    path = "/tools",
    tag = "tools",
    params(ToolQuery),
    responses(
        (status = 200, description = "Tool inventory", body = Vec<Tool>)
    )
)]
pub async fn list_tools(
    State(state): State<crate::AppState>,
    Query(query): Query<ToolQuery>,
) -> Json<Vec<Tool>> {
    let tools = state
        .services
        .inventory
        .list(query.instructor_id.as_deref())
        .await;
    Json(tools)
}

/// Get a tool by id
#[utoipa::path(
    get,
    path = "/tools/{id}",
    tag = "tools",
    params(("id" = String, Path, description = "Tool ID")),
    responses(
        (status = 200, description = "Tool record", body = Tool),
        (status = 404, description = "Tool not found")
    )
)]
pub async fn get_tool(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Tool>> {
    state
        .services
        .inventory
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Tool {} not found", id)))
}

/// Add a tool to an instructor's inventory
#[utoipa::path(
    post,
    path = "/tools",
    tag = "tools",
    request_body = CreateTool,
    responses(
        (status = 201, description = "Tool created", body = Tool),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_tool(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateTool>,
) -> AppResult<(StatusCode, Json<Tool>)> {
    request.validate()?;
    let tool = state.services.inventory.create(request).await;
    Ok((StatusCode::CREATED, Json(tool)))
}

/// Update a tool
#[utoipa::path(
    put,
    path = "/tools/{id}",
    tag = "tools",
    params(("id" = String, Path, description = "Tool ID")),
    request_body = UpdateTool,
    responses(
        (status = 200, description = "Tool updated", body = Tool),
        (status = 404, description = "Tool not found")
    )
)]
pub async fn update_tool(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTool>,
) -> AppResult<Json<Tool>> {
    request.validate()?;
    state
        .services
        .inventory
        .update(&id, request)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Tool {} not found", id)))
}

/// Remove a tool
#[utoipa::path(
    delete,
    path = "/tools/{id}",
    tag = "tools",
    params(("id" = String, Path, description = "Tool ID")),
    responses(
        (status = 200, description = "Tool removed", body = StatusMessage),
        (status = 404, description = "Tool not found")
    )
)]
pub async fn delete_tool(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<StatusMessage>> {
    if state.services.inventory.delete(&id).await {
        Ok(Json(StatusMessage::new("removed", format!("Tool {} removed", id))))
    } else {
        Err(AppError::NotFound(format!("Tool {} not found", id)))
    }
}
