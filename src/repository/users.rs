//! Administrative user methods on Repository

use chrono::Utc;

use crate::models::user::{CreateUser, UpdateUser, User, UserRole, UserStatus};
use crate::models::InstructorToolStatus;

use super::Repository;

impl Repository {
    /// List all users
    pub async fn users_list(&self) -> Vec<User> {
        self.state.read().await.users.values().cloned().collect()
    }

    /// Get a user by id
    pub async fn users_get(&self, id: &str) -> Option<User> {
        self.state.read().await.users.get(id).cloned()
    }

    /// Create a user account
    ///
    /// Accounts start active with today's join date; instructor accounts
    /// carry a `no-tools` badge.
    pub async fn users_create(&self, data: CreateUser) -> User {
        let mut store = self.state.write().await;
        let id = store.next_user_id();
        let user = User {
            id: id.clone(),
            name: data.name,
            email: data.email,
            role: data.role,
            status: UserStatus::Active,
            join_date: Utc::now().date_naive(),
            tool_status: match data.role {
                UserRole::Instructor => Some(InstructorToolStatus::NoTools),
                UserRole::Admin => None,
            },
        };
        store.users.insert(id, user.clone());
        user
    }

    /// Apply a partial update to a user
    pub async fn users_update(&self, id: &str, data: UpdateUser) -> Option<User> {
        let mut store = self.state.write().await;
        let user = store.users.get_mut(id)?;
        if let Some(name) = data.name {
            user.name = name;
        }
        if let Some(email) = data.email {
            user.email = email;
        }
        if let Some(role) = data.role {
            user.role = role;
        }
        if let Some(status) = data.status {
            user.status = status;
        }
        Some(user.clone())
    }

    /// Delete a user account
    ///
    /// No referential integrity: tools and transactions keep whatever
    /// names they denormalized.
    pub async fn users_delete(&self, id: &str) -> bool {
        self.state.write().await.users.shift_remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_instructor_account() {
        let repo = Repository::new();
        let user = repo
            .users_create(CreateUser {
                name: "Dr. Jennifer Lee".into(),
                email: "j.lee@example.edu".into(),
                role: UserRole::Instructor,
            })
            .await;

        assert_eq!(user.id, "U-001");
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.tool_status, Some(InstructorToolStatus::NoTools));
        assert_eq!(user.join_date, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn test_admin_account_has_no_tool_status() {
        let repo = Repository::new();
        let user = repo
            .users_create(CreateUser {
                name: "Site Admin".into(),
                email: "admin@example.edu".into(),
                role: UserRole::Admin,
            })
            .await;
        assert!(user.tool_status.is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = Repository::new();
        let user = repo
            .users_create(CreateUser {
                name: "Dr. Jennifer Lee".into(),
                email: "j.lee@example.edu".into(),
                role: UserRole::Instructor,
            })
            .await;

        let updated = repo
            .users_update(
                &user.id,
                UpdateUser {
                    status: Some(UserStatus::Inactive),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, UserStatus::Inactive);

        assert!(repo.users_delete(&user.id).await);
        assert!(!repo.users_delete(&user.id).await);
        assert!(repo.users_get(&user.id).await.is_none());
    }
}
