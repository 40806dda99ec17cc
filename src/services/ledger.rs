//! Lending transaction service

use crate::models::transaction::{Transaction, TransactionQuery};
use crate::repository::Repository;

#[derive(Clone)]
pub struct LedgerService {
    repository: Repository,
}

impl LedgerService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Issue a tool, opening a pending transaction.
    ///
    /// `None` means the tool is unknown or short on available quantity;
    /// callers decide how to surface that.
    pub async fn create_pending(
        &self,
        tool_id: &str,
        instructor_name: &str,
        instructor_id: &str,
        quantity: u32,
    ) -> Option<Transaction> {
        let transaction = self
            .repository
            .transactions_create_pending(tool_id, instructor_name, instructor_id, quantity)
            .await;
        match &transaction {
            Some(txn) => {
                tracing::info!(transaction_id = %txn.id, tool_id, quantity, "transaction opened");
            }
            None => {
                tracing::warn!(tool_id, quantity, "issue refused");
            }
        }
        transaction
    }

    /// Record the borrowing student on a pending transaction
    pub async fn complete(
        &self,
        transaction_id: &str,
        student_name: &str,
        student_id: &str,
        section: &str,
    ) {
        self.repository
            .transactions_complete(transaction_id, student_name, student_id, section)
            .await;
    }

    /// Confirm the physical return of a borrowed tool
    pub async fn return_tool(&self, transaction_id: &str) {
        self.repository.transactions_return(transaction_id).await;
    }

    /// Hand one returned tool over to the administrator
    pub async fn mark_turned_over(&self, transaction_id: &str) {
        self.repository
            .transactions_mark_turned_over(transaction_id)
            .await;
    }

    /// Hand all of an instructor's returned tools over in one step
    pub async fn mark_all_turned_over(&self, instructor_id: &str) {
        self.repository
            .transactions_mark_all_turned_over(instructor_id)
            .await;
    }

    /// Get a transaction by id
    pub async fn get(&self, transaction_id: &str) -> Option<Transaction> {
        self.repository.transactions_get(transaction_id).await
    }

    /// List transactions, most recent first
    pub async fn list(&self, query: &TransactionQuery) -> Vec<Transaction> {
        self.repository.transactions_list(query).await
    }

    /// List an instructor's returned transactions awaiting turnover
    pub async fn returned_by_instructor(&self, instructor_id: &str) -> Vec<Transaction> {
        self.repository
            .transactions_returned_by_instructor(instructor_id)
            .await
    }

    /// The payload a QR code carries for a transaction: exactly its id,
    /// with no wrapping.
    pub async fn qr_payload(&self, transaction_id: &str) -> Option<String> {
        self.repository
            .transactions_get(transaction_id)
            .await
            .map(|txn| txn.id)
    }
}
