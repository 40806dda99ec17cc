//! Dashboard statistics service

use chrono::Utc;

use crate::api::stats::{StatsResponse, TransactionCounts};
use crate::models::transaction::{TransactionQuery, TransactionStatus};
use crate::repository::Repository;

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Snapshot of the dashboard counters.
    ///
    /// Overdue is a read-time comparison of due dates against now; nothing
    /// in the store marks transactions overdue.
    pub async fn overview(&self) -> StatsResponse {
        let tools = self.repository.tools_list().await;
        let transactions = self
            .repository
            .transactions_list(&TransactionQuery::default())
            .await;

        let now = Utc::now();
        let mut counts = TransactionCounts::default();
        let mut overdue = 0;
        for txn in &transactions {
            match txn.status {
                TransactionStatus::Pending => counts.pending += 1,
                TransactionStatus::Borrowed => {
                    counts.borrowed += 1;
                    if txn.due_date < now {
                        overdue += 1;
                    }
                }
                TransactionStatus::Returned => counts.returned += 1,
                TransactionStatus::TurnedOver => counts.turned_over += 1,
            }
        }

        StatsResponse {
            tool_count: tools.len(),
            total_quantity: tools.iter().map(|t| t.total_qty).sum(),
            available_quantity: tools.iter().map(|t| t.available_qty).sum(),
            transactions: counts,
            overdue_count: overdue,
            borrower_count: self.repository.borrowers_list().await.len(),
            instructor_count: self.repository.instructors_list().await.len(),
        }
    }
}
