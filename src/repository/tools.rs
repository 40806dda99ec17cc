//! Tool inventory methods on Repository

use crate::models::tool::{CreateTool, Tool, ToolCondition, ToolStatus, UpdateTool};

use super::{Repository, Store};

impl Store {
    /// Atomic check-and-decrement of a tool's available quantity.
    ///
    /// Fails without side effects when the tool is unknown or holds less
    /// than the requested quantity. Callers must hold the write lock, which
    /// makes the check and the decrement a single step relative to every
    /// other operation.
    pub(super) fn reserve(&mut self, tool_id: &str, quantity: u32) -> bool {
        match self.tools.get_mut(tool_id) {
            Some(tool) if quantity <= tool.available_qty => {
                tool.available_qty -= quantity;
                true
            }
            _ => false,
        }
    }

    /// Restore a previously reserved quantity to a tool.
    ///
    /// The tool may have been deleted while its transaction was open; the
    /// release is then dropped silently.
    pub(super) fn release(&mut self, tool_id: &str, quantity: u32) {
        if let Some(tool) = self.tools.get_mut(tool_id) {
            tool.available_qty += quantity;
        }
    }
}

impl Repository {
    /// List all tools
    pub async fn tools_list(&self) -> Vec<Tool> {
        self.state.read().await.tools.values().cloned().collect()
    }

    /// List tools owned by an instructor
    pub async fn tools_by_instructor(&self, instructor_id: &str) -> Vec<Tool> {
        self.state
            .read()
            .await
            .tools
            .values()
            .filter(|t| t.instructor_id == instructor_id)
            .cloned()
            .collect()
    }

    /// Get a tool by id
    pub async fn tools_get(&self, id: &str) -> Option<Tool> {
        self.state.read().await.tools.get(id).cloned()
    }

    /// Create a tool
    pub async fn tools_create(&self, data: CreateTool) -> Tool {
        let mut store = self.state.write().await;
        let id = store.next_tool_id();
        let available_qty = data
            .available_qty
            .unwrap_or(data.total_qty)
            .min(data.total_qty);
        let tool = Tool {
            id: id.clone(),
            name: data.name,
            category: data.category,
            location: data.location,
            image: data.image,
            total_qty: data.total_qty,
            available_qty,
            status: data.status.unwrap_or(ToolStatus::Available),
            condition: data.condition.unwrap_or(ToolCondition::Good),
            instructor_id: data.instructor_id,
        };
        store.tools.insert(id, tool.clone());
        tool
    }

    /// Apply a partial update to a tool
    ///
    /// Keeps `available_qty <= total_qty` after the edit; no other invariant
    /// applies to plain CRUD.
    pub async fn tools_update(&self, id: &str, data: UpdateTool) -> Option<Tool> {
        let mut store = self.state.write().await;
        let tool = store.tools.get_mut(id)?;
        if let Some(name) = data.name {
            tool.name = name;
        }
        if let Some(category) = data.category {
            tool.category = category;
        }
        if let Some(location) = data.location {
            tool.location = location;
        }
        if let Some(image) = data.image {
            tool.image = image;
        }
        if let Some(total_qty) = data.total_qty {
            tool.total_qty = total_qty;
        }
        if let Some(available_qty) = data.available_qty {
            tool.available_qty = available_qty;
        }
        tool.available_qty = tool.available_qty.min(tool.total_qty);
        if let Some(status) = data.status {
            tool.status = status;
        }
        if let Some(condition) = data.condition {
            tool.condition = condition;
        }
        if let Some(instructor_id) = data.instructor_id {
            tool.instructor_id = instructor_id;
        }
        Some(tool.clone())
    }

    /// Delete a tool
    ///
    /// Open transactions referencing the tool are left in place; their
    /// denormalized tool name keeps them renderable.
    pub async fn tools_delete(&self, id: &str) -> bool {
        self.state.write().await.tools.shift_remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrench(total: u32) -> CreateTool {
        CreateTool {
            name: "Torque Wrench".into(),
            category: "Hand Tools".into(),
            location: "Cabinet A1".into(),
            image: String::new(),
            total_qty: total,
            available_qty: None,
            status: None,
            condition: None,
            instructor_id: "I-001".into(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = Repository::new();
        let first = repo.tools_create(wrench(5)).await;
        let second = repo.tools_create(wrench(3)).await;
        assert_eq!(first.id, "T-001");
        assert_eq!(second.id, "T-002");
        assert_eq!(first.available_qty, 5);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = Repository::new();
        let first = repo.tools_create(wrench(5)).await;
        assert!(repo.tools_delete(&first.id).await);
        let next = repo.tools_create(wrench(2)).await;
        assert_eq!(next.id, "T-002");
    }

    #[tokio::test]
    async fn test_update_clamps_available_to_total() {
        let repo = Repository::new();
        let tool = repo.tools_create(wrench(5)).await;
        let updated = repo
            .tools_update(
                &tool.id,
                UpdateTool {
                    total_qty: Some(2),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.total_qty, 2);
        assert_eq!(updated.available_qty, 2);
    }

    #[tokio::test]
    async fn test_update_unknown_tool_is_none() {
        let repo = Repository::new();
        assert!(repo
            .tools_update("T-999", UpdateTool::default())
            .await
            .is_none());
    }
}
