//! Borrower directory methods on Repository

use crate::models::Borrower;

use super::{Repository, Store};

impl Store {
    /// Insert-if-absent by student id; the first record for an id wins and
    /// newer entries go to the front.
    pub(super) fn register_borrower(&mut self, borrower: Borrower) {
        if self.borrowers.iter().any(|b| b.id == borrower.id) {
            return;
        }
        self.borrowers.insert(0, borrower);
    }
}

impl Repository {
    /// List every student who has ever borrowed, newest first
    pub async fn borrowers_list(&self) -> Vec<Borrower> {
        self.state.read().await.borrowers.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::instructor::CreateInstructor;
    use crate::models::tool::CreateTool;

    async fn seeded() -> (Repository, String, String) {
        let repo = Repository::new();
        let instructor = repo
            .instructors_create(CreateInstructor {
                name: "Prof. Richard Anderson".into(),
                email: "r.anderson@example.edu".into(),
                shift_end_time: "14:00".into(),
            })
            .await;
        let tool = repo
            .tools_create(CreateTool {
                name: "Torque Wrench".into(),
                category: "Hand Tools".into(),
                location: "Cabinet A1".into(),
                image: String::new(),
                total_qty: 10,
                available_qty: None,
                status: None,
                condition: None,
                instructor_id: instructor.id.clone(),
            })
            .await;
        (repo, instructor.id, tool.id)
    }

    #[tokio::test]
    async fn test_first_write_wins_per_student_id() {
        let (repo, instructor_id, tool_id) = seeded().await;

        let a = repo
            .transactions_create_pending(&tool_id, "Prof X", &instructor_id, 1)
            .await
            .unwrap();
        repo.transactions_complete(&a.id, "Jane Doe", "S-01", "AMT-1A")
            .await;

        // Same student borrowing again, with a different section on file.
        let b = repo
            .transactions_create_pending(&tool_id, "Prof X", &instructor_id, 1)
            .await
            .unwrap();
        repo.transactions_complete(&b.id, "Jane Doe", "S-01", "AMT-2B")
            .await;

        let borrowers = repo.borrowers_list().await;
        assert_eq!(borrowers.len(), 1);
        assert_eq!(borrowers[0].course, "AMT-1A");
    }

    #[tokio::test]
    async fn test_newest_distinct_borrower_first() {
        let (repo, instructor_id, tool_id) = seeded().await;

        for (name, sid) in [("Jane Doe", "S-01"), ("John Roe", "S-02")] {
            let txn = repo
                .transactions_create_pending(&tool_id, "Prof X", &instructor_id, 1)
                .await
                .unwrap();
            repo.transactions_complete(&txn.id, name, sid, "AMT-1A")
                .await;
        }

        let borrowers = repo.borrowers_list().await;
        assert_eq!(borrowers[0].id, "S-02");
        assert_eq!(borrowers[1].id, "S-01");
    }
}
