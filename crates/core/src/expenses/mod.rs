//! Expenses module - the append-only per-user expense ledger.

mod expenses_model;
mod expenses_traits;

pub use expenses_model::{parse_amount, DateRange, ExpenseRecord, NewExpense, NewExpenseRecord};
pub use expenses_traits::ExpenseRepositoryTrait;
