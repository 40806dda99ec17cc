//! Transaction ledger methods on Repository
//!
//! The ledger owns the lifecycle state machine:
//!
//! ```text
//! (none) -> pending -> borrowed -> returned -> turned-over
//! ```
//!
//! Transitions are guarded so a transaction can never move backward and a
//! return can never release its quantity twice. Operations on unknown ids
//! or out-of-state transactions are silent no-ops; only issuance signals
//! failure, by returning no transaction.

use chrono::Utc;

use crate::models::transaction::{Transaction, TransactionQuery, TransactionStatus};
use crate::models::Borrower;
use crate::shift;

use super::Repository;

impl Repository {
    /// Issue a tool: reserve quantity and open a pending transaction.
    ///
    /// Returns `None` when the tool is unknown or does not have the
    /// requested quantity available, leaving the store untouched. The due
    /// date is today at the shift end of the instructor who owns the tool,
    /// which is not necessarily the instructor issuing it.
    pub async fn transactions_create_pending(
        &self,
        tool_id: &str,
        instructor_name: &str,
        instructor_id: &str,
        quantity: u32,
    ) -> Option<Transaction> {
        let mut store = self.state.write().await;

        let (tool_name, owner_id) = match store.tools.get(tool_id) {
            Some(tool) => (tool.name.clone(), tool.instructor_id.clone()),
            None => return None,
        };
        if !store.reserve(tool_id, quantity) {
            return None;
        }

        let shift_end = store
            .instructors
            .get(&owner_id)
            .map(|i| shift::shift_end_or_default(&i.shift_end_time))
            .unwrap_or_else(|| shift::shift_end_or_default(shift::DEFAULT_SHIFT_END));

        let now = Utc::now();
        let transaction = Transaction {
            id: store.next_transaction_id(),
            tool_id: tool_id.to_string(),
            tool_name,
            student_name: String::new(),
            student_id: String::new(),
            section: String::new(),
            instructor_name: instructor_name.to_string(),
            instructor_id: instructor_id.to_string(),
            borrowed_at: now,
            returned_at: None,
            turned_over_at: None,
            status: TransactionStatus::Pending,
            due_date: shift::due_date(now, shift_end),
            quantity,
        };
        store.transactions.insert(0, transaction.clone());
        store.recompute_tool_status(instructor_id);
        Some(transaction)
    }

    /// Record the borrowing student on a pending transaction.
    ///
    /// Moves `pending -> borrowed` and re-stamps `borrowed_at` to the pickup
    /// moment; the due date keeps its issuance anchor. Registers the student
    /// in the borrower directory. No-op unless the transaction exists and is
    /// pending.
    pub async fn transactions_complete(
        &self,
        transaction_id: &str,
        student_name: &str,
        student_id: &str,
        section: &str,
    ) {
        let mut store = self.state.write().await;
        let Some(txn) = store
            .transactions
            .iter_mut()
            .find(|t| t.id == transaction_id)
        else {
            return;
        };
        if txn.status != TransactionStatus::Pending {
            return;
        }
        txn.student_name = student_name.to_string();
        txn.student_id = student_id.to_string();
        txn.section = section.to_string();
        txn.status = TransactionStatus::Borrowed;
        txn.borrowed_at = Utc::now();
        let instructor_id = txn.instructor_id.clone();

        store.register_borrower(Borrower {
            name: student_name.to_string(),
            id: student_id.to_string(),
            course: section.to_string(),
        });
        store.recompute_tool_status(&instructor_id);
    }

    /// Confirm the physical return of a borrowed tool.
    ///
    /// Moves `borrowed -> returned` and releases the held quantity back to
    /// the tool. The guard on the borrowed state means a second call cannot
    /// over-credit availability. No-op unless the transaction exists and is
    /// borrowed.
    pub async fn transactions_return(&self, transaction_id: &str) {
        let mut store = self.state.write().await;
        let Some(txn) = store
            .transactions
            .iter_mut()
            .find(|t| t.id == transaction_id)
        else {
            return;
        };
        if txn.status != TransactionStatus::Borrowed {
            return;
        }
        txn.status = TransactionStatus::Returned;
        txn.returned_at = Some(Utc::now());
        let (tool_id, quantity, instructor_id) =
            (txn.tool_id.clone(), txn.quantity, txn.instructor_id.clone());

        store.release(&tool_id, quantity);
        store.recompute_tool_status(&instructor_id);
    }

    /// Hand a returned tool over to the administrator.
    ///
    /// Moves `returned -> turned-over`, the terminal state. No-op unless the
    /// transaction exists and is returned.
    pub async fn transactions_mark_turned_over(&self, transaction_id: &str) {
        let mut store = self.state.write().await;
        let Some(txn) = store
            .transactions
            .iter_mut()
            .find(|t| t.id == transaction_id)
        else {
            return;
        };
        if txn.status != TransactionStatus::Returned {
            return;
        }
        txn.status = TransactionStatus::TurnedOver;
        txn.turned_over_at = Some(Utc::now());
        let instructor_id = txn.instructor_id.clone();

        store.recompute_tool_status(&instructor_id);
    }

    /// Turn over every returned transaction of one instructor in one step.
    ///
    /// The bulk transition and the single badge recompute happen inside one
    /// critical section, so no reader ever observes partial progress.
    pub async fn transactions_mark_all_turned_over(&self, instructor_id: &str) {
        let mut store = self.state.write().await;
        let now = Utc::now();
        for txn in store
            .transactions
            .iter_mut()
            .filter(|t| t.instructor_id == instructor_id && t.status == TransactionStatus::Returned)
        {
            txn.status = TransactionStatus::TurnedOver;
            txn.turned_over_at = Some(now);
        }
        store.recompute_tool_status(instructor_id);
    }

    /// Get a transaction by id
    pub async fn transactions_get(&self, transaction_id: &str) -> Option<Transaction> {
        self.state
            .read()
            .await
            .transactions
            .iter()
            .find(|t| t.id == transaction_id)
            .cloned()
    }

    /// List transactions, most recent first, optionally filtered
    pub async fn transactions_list(&self, query: &TransactionQuery) -> Vec<Transaction> {
        self.state
            .read()
            .await
            .transactions
            .iter()
            .filter(|t| {
                query
                    .instructor_id
                    .as_deref()
                    .map_or(true, |id| t.instructor_id == id)
            })
            .filter(|t| query.status.map_or(true, |s| t.status == s))
            .cloned()
            .collect()
    }

    /// List an instructor's returned transactions awaiting turnover
    pub async fn transactions_returned_by_instructor(
        &self,
        instructor_id: &str,
    ) -> Vec<Transaction> {
        self.transactions_list(&TransactionQuery {
            instructor_id: Some(instructor_id.to_string()),
            status: Some(TransactionStatus::Returned),
        })
        .await
    }
}
