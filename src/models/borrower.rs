//! Borrower directory model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A student who has borrowed at least once, keyed by student id
///
/// The directory is a deduplicated set: the first record written for a
/// given id wins, later borrows with the same id leave it untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Borrower {
    pub name: String,
    pub id: String,
    pub course: String,
}
