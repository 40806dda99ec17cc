//! Instructor registry, status aggregation and shift updates

use crate::models::instructor::{CreateInstructor, Instructor, InstructorToolStatus};
use crate::models::transaction::TransactionStatus;
use crate::shift;

use super::{Repository, Store};

impl Store {
    /// Recompute the cached tool-status badge for one instructor.
    ///
    /// A pure derivation over the instructor's full transaction set, run
    /// after every ledger mutation touching it: anything short of fully
    /// turned over counts as in use.
    pub(super) fn recompute_tool_status(&mut self, instructor_id: &str) {
        let mut has_any = false;
        let mut has_open = false;
        for txn in self
            .transactions
            .iter()
            .filter(|t| t.instructor_id == instructor_id)
        {
            has_any = true;
            if txn.status != TransactionStatus::TurnedOver {
                has_open = true;
                break;
            }
        }

        let status = if has_open {
            InstructorToolStatus::ToolsInUse
        } else if has_any {
            InstructorToolStatus::AllTurnedOver
        } else {
            InstructorToolStatus::NoTools
        };

        if let Some(instructor) = self.instructors.get_mut(instructor_id) {
            instructor.tool_status = status;
        }
    }
}

impl Repository {
    /// List all instructors
    pub async fn instructors_list(&self) -> Vec<Instructor> {
        self.state
            .read()
            .await
            .instructors
            .values()
            .cloned()
            .collect()
    }

    /// Get an instructor by id
    pub async fn instructors_get(&self, id: &str) -> Option<Instructor> {
        self.state.read().await.instructors.get(id).cloned()
    }

    /// Register an instructor
    pub async fn instructors_create(&self, data: CreateInstructor) -> Instructor {
        let mut store = self.state.write().await;
        let id = store.next_instructor_id();
        let instructor = Instructor {
            id: id.clone(),
            name: data.name,
            email: data.email,
            tool_status: InstructorToolStatus::NoTools,
            shift_end_time: data.shift_end_time,
        };
        store.instructors.insert(id, instructor.clone());
        instructor
    }

    /// Change an instructor's shift end time and recompute due dates.
    ///
    /// Only `borrowed` and `returned` transactions are touched; each one is
    /// re-anchored to its own `borrowed_at` date, not to today. Pending and
    /// turned-over transactions keep their due dates. Silent no-op for an
    /// unknown instructor.
    pub async fn instructors_update_shift_time(&self, instructor_id: &str, shift_end_time: &str) {
        let mut store = self.state.write().await;
        let Some(instructor) = store.instructors.get_mut(instructor_id) else {
            return;
        };
        instructor.shift_end_time = shift_end_time.to_string();

        // Malformed times are stored as given but leave due dates alone;
        // the HTTP boundary rejects them before they get here.
        let Some(shift_end) = shift::parse_shift_end(shift_end_time) else {
            return;
        };
        for txn in store.transactions.iter_mut().filter(|t| {
            t.instructor_id == instructor_id
                && matches!(
                    t.status,
                    TransactionStatus::Borrowed | TransactionStatus::Returned
                )
        }) {
            txn.due_date = shift::due_date(txn.borrowed_at, shift_end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tool::CreateTool;
    use crate::models::transaction::TransactionQuery;

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
    async fn test_status_starts_at_no_tools() {
        let (repo, instructor_id, _) = seeded().await;
        let instructor = repo.instructors_get(&instructor_id).await.unwrap();
        assert_eq!(instructor.tool_status, InstructorToolStatus::NoTools);
    }

    #[tokio::test]
    async fn test_status_follows_ledger_mutations() {
        let (repo, instructor_id, tool_id) = seeded().await;

        let txn = repo
            .transactions_create_pending(&tool_id, "Prof X", &instructor_id, 1)
            .await
            .unwrap();
        assert_eq!(
            repo.instructors_get(&instructor_id).await.unwrap().tool_status,
            InstructorToolStatus::ToolsInUse
        );

        repo.transactions_complete(&txn.id, "Jane Doe", "S-01", "AMT-1A")
            .await;
        repo.transactions_return(&txn.id).await;
        assert_eq!(
            repo.instructors_get(&instructor_id).await.unwrap().tool_status,
            InstructorToolStatus::ToolsInUse
        );

        repo.transactions_mark_turned_over(&txn.id).await;
        assert_eq!(
            repo.instructors_get(&instructor_id).await.unwrap().tool_status,
            InstructorToolStatus::AllTurnedOver
        );
    }

    #[tokio::test]
    async fn test_aggregation_is_idempotent() {
        let (repo, instructor_id, tool_id) = seeded().await;
        let txn = repo
            .transactions_create_pending(&tool_id, "Prof X", &instructor_id, 1)
            .await
            .unwrap();
        repo.transactions_complete(&txn.id, "Jane Doe", "S-01", "AMT-1A")
            .await;
        repo.transactions_return(&txn.id).await;

        // Repeating the bulk turnover with no intervening mutation must not
        // change the derived badge.
        repo.transactions_mark_all_turned_over(&instructor_id).await;
        let first = repo.instructors_get(&instructor_id).await.unwrap().tool_status;
        repo.transactions_mark_all_turned_over(&instructor_id).await;
        let second = repo.instructors_get(&instructor_id).await.unwrap().tool_status;
        assert_eq!(first, second);
        assert_eq!(first, InstructorToolStatus::AllTurnedOver);
    }

    #[tokio::test]
    async fn test_shift_update_rewrites_open_due_dates_only() {
        let (repo, instructor_id, tool_id) = seeded().await;

        let borrowed = repo
            .transactions_create_pending(&tool_id, "Prof X", &instructor_id, 1)
            .await
            .unwrap();
        repo.transactions_complete(&borrowed.id, "Jane Doe", "S-01", "AMT-1A")
            .await;

        let returned = repo
            .transactions_create_pending(&tool_id, "Prof X", &instructor_id, 1)
            .await
            .unwrap();
        repo.transactions_complete(&returned.id, "John Roe", "S-02", "AMT-2B")
            .await;
        repo.transactions_return(&returned.id).await;

        let turned_over = repo
            .transactions_create_pending(&tool_id, "Prof X", &instructor_id, 1)
            .await
            .unwrap();
        repo.transactions_complete(&turned_over.id, "Ann Poe", "S-03", "AMT-1C")
            .await;
        repo.transactions_return(&turned_over.id).await;
        repo.transactions_mark_turned_over(&turned_over.id).await;

        let pending = repo
            .transactions_create_pending(&tool_id, "Prof X", &instructor_id, 1)
            .await
            .unwrap();

        let before: Vec<_> = repo
            .transactions_list(&TransactionQuery::default())
            .await
            .into_iter()
            .map(|t| (t.id.clone(), t.due_date))
            .collect();

        repo.instructors_update_shift_time(&instructor_id, "20:00")
            .await;

        let end = shift::parse_shift_end("20:00").unwrap();
        for (id, old_due) in before {
            let txn = repo.transactions_get(&id).await.unwrap();
            if id == borrowed.id || id == returned.id {
                // Re-anchored to the transaction's own borrow date at 20:00.
                assert_eq!(txn.due_date, shift::due_date(txn.borrowed_at, end));
            } else {
                assert!(id == pending.id || id == turned_over.id);
                assert_eq!(txn.due_date, old_due);
            }
        }
        assert_eq!(
            repo.instructors_get(&instructor_id)
                .await
                .unwrap()
                .shift_end_time,
            "20:00"
        );
    }

    #[tokio::test]
    async fn test_shift_update_ignores_other_instructors() {
        let (repo, instructor_id, tool_id) = seeded().await;
        let other = repo
            .instructors_create(CreateInstructor {
                name: "Dr. Sarah Mitchell".into(),
                email: "s.mitchell@example.edu".into(),
                shift_end_time: "16:00".into(),
            })
            .await;

        let txn = repo
            .transactions_create_pending(&tool_id, "Prof X", &instructor_id, 1)
            .await
            .unwrap();
        repo.transactions_complete(&txn.id, "Jane Doe", "S-01", "AMT-1A")
            .await;
        let due_before = repo.transactions_get(&txn.id).await.unwrap().due_date;

        repo.instructors_update_shift_time(&other.id, "20:00").await;

        assert_eq!(
            repo.transactions_get(&txn.id).await.unwrap().due_date,
            due_before
        );
    }

    #[tokio::test]
    async fn test_shift_update_unknown_instructor_is_noop() {
        let (repo, _, _) = seeded().await;
        repo.instructors_update_shift_time("I-999", "20:00").await;
        assert_eq!(repo.instructors_list().await.len(), 1);
    }
}
