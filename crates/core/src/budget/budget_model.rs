//! Budget snapshot models. Snapshots are derived on demand and never persisted.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::round_for_display;
use crate::categories::BudgetGroup;
use crate::errors::Result;
use crate::expenses::ExpenseRecord;
use crate::notifications::NotificationEvent;
use crate::utils::money_utils;

/// Allocated, spent and remaining amounts for one tracked group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSnapshot {
    pub group: BudgetGroup,
    pub allocated: Decimal,
    pub spent: Decimal,
    /// `allocated - spent`; negative when records bypassed admission
    pub remaining: Decimal,
    /// `spent / allocated * 100`, unclamped
    pub percent_used: Decimal,
}

impl GroupSnapshot {
    /// Fails with `Error::Arithmetic` when the derived figures do not fit a decimal.
    pub fn new(group: BudgetGroup, allocated: Decimal, spent: Decimal) -> Result<Self> {
        let percent_used = if allocated.is_zero() {
            // Nothing to divide by: an empty allocation is either untouched or fully used.
            if spent.is_zero() {
                Decimal::ZERO
            } else {
                Decimal::ONE_HUNDRED
            }
        } else {
            money_utils::percent_of(spent, allocated, "percent used")?
        };
        Ok(Self {
            group,
            allocated,
            spent,
            remaining: money_utils::sub(allocated, spent, "remaining budget")?,
            percent_used,
        })
    }

    /// Percentage for progress bars: clamped to 0..=100 and rounded.
    pub fn percent_used_display(&self) -> Decimal {
        round_for_display(
            self.percent_used
                .max(Decimal::ZERO)
                .min(Decimal::ONE_HUNDRED),
        )
    }
}

/// Per-group budget state for one user's active salary cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSnapshot {
    pub user_id: String,
    pub salary: Decimal,
    pub cycle_start: NaiveDateTime,
    /// Tracked groups in display order: Basic, Lifestyle, Savings
    pub groups: Vec<GroupSnapshot>,
    /// Spend in uncapped categories
    pub other_spent: Decimal,
    /// Spend across every group, including Other
    pub total_spent: Decimal,
    /// `salary - total_spent`
    pub remaining_salary: Decimal,
}

impl AllocationSnapshot {
    pub fn group(&self, group: BudgetGroup) -> Option<&GroupSnapshot> {
        self.groups.iter().find(|g| g.group == group)
    }

    /// Remaining budget for a tracked group, `None` for Other.
    pub fn remaining(&self, group: BudgetGroup) -> Option<Decimal> {
        self.group(group).map(|g| g.remaining)
    }
}

/// Result of a successful `add_expense`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedExpense {
    pub record: ExpenseRecord,
    /// Snapshot recomputed after the append
    pub snapshot: AllocationSnapshot,
    /// Near-limit alerts raised by this admission
    pub alerts: Vec<NotificationEvent>,
}
