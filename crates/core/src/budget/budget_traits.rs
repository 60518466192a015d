use async_trait::async_trait;

use super::budget_model::{AcceptedExpense, AllocationSnapshot};
use crate::categories::BudgetGroup;
use crate::errors::Result;
use crate::expenses::{DateRange, ExpenseRecord, NewExpense};

/// Trait defining the contract for budget operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Validates, admits and appends an expense.
    ///
    /// Returns `Error::Validation` for bad input regardless of budget state,
    /// and `Error::BudgetExceeded` when a tracked group's cap would be crossed.
    /// Nothing is appended unless the result is `Ok`.
    async fn add_expense(&self, input: NewExpense) -> Result<AcceptedExpense>;

    /// Current snapshot for the user's active salary cycle.
    fn get_snapshot(&self, user_id: &str) -> Result<AllocationSnapshot>;

    /// Ledger entries by `expense_date`. `None` means the last 30 days.
    fn list_expenses(&self, user_id: &str, range: Option<DateRange>)
        -> Result<Vec<ExpenseRecord>>;

    fn classify(&self, category: &str) -> BudgetGroup;
}
