//! Ledger store trait.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::expenses_model::{DateRange, ExpenseRecord, NewExpenseRecord};
use crate::errors::Result;

/// Append-only, read-mostly expense log.
///
/// Records for one user are returned in insertion order (ascending
/// `created_at`, ties broken by id). There is no update or delete.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Appends a record, assigning its id and `created_at`.
    ///
    /// Either the record is durably stored and returned, or nothing is stored.
    async fn append(&self, record: NewExpenseRecord) -> Result<ExpenseRecord>;

    /// Records whose `expense_date` falls inside `range`.
    fn query(&self, user_id: &str, range: &DateRange) -> Result<Vec<ExpenseRecord>>;

    /// Records appended at or after `since`. Used to scope a salary cycle.
    fn query_recorded_since(
        &self,
        user_id: &str,
        since: NaiveDateTime,
    ) -> Result<Vec<ExpenseRecord>>;
}
