//! In-memory repository layer
//!
//! All five collections live in a single [`Store`] behind one `RwLock`.
//! Every engine operation takes the lock exactly once and performs all of
//! its steps inside that critical section, so the reserve-then-record
//! sequence and the bulk turnover are atomic with respect to every other
//! caller and no reader can observe partial progress.

pub mod borrowers;
pub mod instructors;
pub mod seed;
pub mod tools;
pub mod transactions;
pub mod users;

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::models::{Borrower, Instructor, Tool, Transaction, User};

/// Process-local data store owning every collection
///
/// Field writes are partitioned by module: `available_qty` is touched only
/// by the inventory code in `tools`, transaction status only by the ledger
/// in `transactions`, the cached instructor badge only by the aggregator in
/// `instructors`.
#[derive(Debug)]
pub struct Store {
    tools: IndexMap<String, Tool>,
    /// Most recent first
    transactions: Vec<Transaction>,
    /// Newest first, deduplicated by student id
    borrowers: Vec<Borrower>,
    instructors: IndexMap<String, Instructor>,
    users: IndexMap<String, User>,
    next_tool_seq: u32,
    next_instructor_seq: u32,
    next_user_seq: u32,
    next_transaction_seq: u32,
}

impl Store {
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
            transactions: Vec::new(),
            borrowers: Vec::new(),
            instructors: IndexMap::new(),
            users: IndexMap::new(),
            next_tool_seq: 1,
            next_instructor_seq: 1,
            next_user_seq: 1,
            // Time-seeded so restarts keep producing fresh suffixes
            next_transaction_seq: (Utc::now().timestamp_millis() % 1_000_000) as u32,
        }
    }

    fn next_tool_id(&mut self) -> String {
        let id = format!("T-{:03}", self.next_tool_seq);
        self.next_tool_seq += 1;
        id
    }

    fn next_instructor_id(&mut self) -> String {
        let id = format!("I-{:03}", self.next_instructor_seq);
        self.next_instructor_seq += 1;
        id
    }

    fn next_user_id(&mut self) -> String {
        let id = format!("U-{:03}", self.next_user_seq);
        self.next_user_seq += 1;
        id
    }

    fn next_transaction_id(&mut self) -> String {
        let id = format!("TRK-{:06}", self.next_transaction_seq);
        self.next_transaction_seq = (self.next_transaction_seq + 1) % 1_000_000;
        id
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to the in-memory store
#[derive(Clone)]
pub struct Repository {
    state: Arc<RwLock<Store>>,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(Store::new())),
        }
    }

    /// Create a repository preloaded with the demo fixtures
    pub fn with_demo_data() -> Self {
        let mut store = Store::new();
        seed::load_demo_data(&mut store);
        Self {
            state: Arc::new(RwLock::new(store)),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
