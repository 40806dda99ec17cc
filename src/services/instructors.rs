//! Instructor registry service

use crate::models::instructor::{CreateInstructor, Instructor};
use crate::repository::Repository;

#[derive(Clone)]
pub struct InstructorsService {
    repository: Repository,
}

impl InstructorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all instructors
    pub async fn list(&self) -> Vec<Instructor> {
        self.repository.instructors_list().await
    }

    /// Get an instructor by id
    pub async fn get(&self, id: &str) -> Option<Instructor> {
        self.repository.instructors_get(id).await
    }

    /// Register an instructor
    pub async fn create(&self, data: CreateInstructor) -> Instructor {
        let instructor = self.repository.instructors_create(data).await;
        tracing::info!(instructor_id = %instructor.id, "instructor registered");
        instructor
    }

    /// Change a shift end time, recomputing open due dates
    pub async fn update_shift_time(&self, instructor_id: &str, shift_end_time: &str) {
        self.repository
            .instructors_update_shift_time(instructor_id, shift_end_time)
            .await;
        tracing::info!(instructor_id, shift_end_time, "shift end time updated");
    }
}
