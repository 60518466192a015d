//! Domain event types.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::BudgetGroup;

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about committed data. They are emitted only
/// after the write succeeded, so a consumer never observes a rejected or
/// failed expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// An expense was admitted and appended to the ledger.
    ExpenseAdded {
        user_id: String,
        expense_id: String,
        group: BudgetGroup,
        amount: Decimal,
    },

    /// A user's salary was changed; allocations must be recomputed.
    SalaryUpdated {
        user_id: String,
        old_salary: Decimal,
        new_salary: Decimal,
    },

    /// A new salary cycle started. Spend is scoped from `cycle_start` on.
    SalaryCycleReloaded {
        user_id: String,
        cycle_start: NaiveDateTime,
    },
}

impl DomainEvent {
    /// Creates an ExpenseAdded event.
    pub fn expense_added(
        user_id: String,
        expense_id: String,
        group: BudgetGroup,
        amount: Decimal,
    ) -> Self {
        Self::ExpenseAdded {
            user_id,
            expense_id,
            group,
            amount,
        }
    }

    /// Creates a SalaryUpdated event.
    pub fn salary_updated(user_id: String, old_salary: Decimal, new_salary: Decimal) -> Self {
        Self::SalaryUpdated {
            user_id,
            old_salary,
            new_salary,
        }
    }

    /// Creates a SalaryCycleReloaded event.
    pub fn salary_cycle_reloaded(user_id: String, cycle_start: NaiveDateTime) -> Self {
        Self::SalaryCycleReloaded {
            user_id,
            cycle_start,
        }
    }

    /// The user the event belongs to.
    pub fn user_id(&self) -> &str {
        match self {
            DomainEvent::ExpenseAdded { user_id, .. }
            | DomainEvent::SalaryUpdated { user_id, .. }
            | DomainEvent::SalaryCycleReloaded { user_id, .. } => user_id,
        }
    }
}
