//! Tool inventory service

use crate::models::tool::{CreateTool, Tool, UpdateTool};
use crate::repository::Repository;

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List tools, optionally restricted to one instructor
    pub async fn list(&self, instructor_id: Option<&str>) -> Vec<Tool> {
        match instructor_id {
            Some(id) => self.repository.tools_by_instructor(id).await,
            None => self.repository.tools_list().await,
        }
    }

    /// Get a tool by id
    pub async fn get(&self, id: &str) -> Option<Tool> {
        self.repository.tools_get(id).await
    }

    /// Create a tool
    pub async fn create(&self, data: CreateTool) -> Tool {
        let tool = self.repository.tools_create(data).await;
        tracing::info!(tool_id = %tool.id, name = %tool.name, "tool created");
        tool
    }

    /// Update a tool
    pub async fn update(&self, id: &str, data: UpdateTool) -> Option<Tool> {
        self.repository.tools_update(id, data).await
    }

    /// Delete a tool
    pub async fn delete(&self, id: &str) -> bool {
        let deleted = self.repository.tools_delete(id).await;
        if deleted {
            tracing::info!(tool_id = %id, "tool deleted");
        }
        deleted
    }
}
