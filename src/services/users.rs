//! Administrative user service

use crate::models::user::{CreateUser, UpdateUser, User};
use crate::models::Borrower;
use crate::repository::Repository;

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all users
    pub async fn list(&self) -> Vec<User> {
        self.repository.users_list().await
    }

    /// Get a user by id
    pub async fn get(&self, id: &str) -> Option<User> {
        self.repository.users_get(id).await
    }

    /// Create a user account
    pub async fn create(&self, data: CreateUser) -> User {
        let user = self.repository.users_create(data).await;
        tracing::info!(user_id = %user.id, role = ?user.role, "user created");
        user
    }

    /// Update a user account
    pub async fn update(&self, id: &str, data: UpdateUser) -> Option<User> {
        self.repository.users_update(id, data).await
    }

    /// Delete a user account
    pub async fn delete(&self, id: &str) -> bool {
        self.repository.users_delete(id).await
    }

    /// List the borrower directory, newest first
    pub async fn borrowers(&self) -> Vec<Borrower> {
        self.repository.borrowers_list().await
    }
}
