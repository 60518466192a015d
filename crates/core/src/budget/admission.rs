//! Pre-commit spending cap check.

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::budget_model::AllocationSnapshot;
use crate::categories::BudgetGroup;
use crate::errors::{Error, Result};
use crate::expenses::NewExpenseRecord;

/// Outcome of validating a prospective expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "camelCase")]
pub enum AdmissionDecision {
    Accept,
    Reject {
        group: BudgetGroup,
        remaining: Decimal,
    },
}

impl AdmissionDecision {
    /// Converts a rejection into `Error::BudgetExceeded`.
    pub fn into_result(self) -> Result<()> {
        match self {
            AdmissionDecision::Accept => Ok(()),
            AdmissionDecision::Reject { group, remaining } => {
                Err(Error::BudgetExceeded { group, remaining })
            }
        }
    }
}

/// Validates a prospective expense against a point-in-time snapshot.
///
/// Optimistic: the snapshot is read before the append and nothing locks the
/// ledger in between, so concurrent writers for the same user can each pass
/// against the same stale remaining budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdmissionController;

impl AdmissionController {
    pub fn new() -> Self {
        Self
    }

    /// Rejects iff the group is tracked and `amount > remaining(group)`.
    /// Spending exactly the remaining budget is accepted.
    pub fn validate(
        &self,
        prospective: &NewExpenseRecord,
        snapshot: &AllocationSnapshot,
    ) -> AdmissionDecision {
        let group = prospective.budget_group;
        if !group.is_tracked() {
            return AdmissionDecision::Accept;
        }
        let remaining = snapshot.remaining(group).unwrap_or(Decimal::ZERO);
        if prospective.amount > remaining {
            debug!(
                "Rejecting {} {} for user {}: {} remaining",
                prospective.amount, group, prospective.user_id, remaining
            );
            AdmissionDecision::Reject { group, remaining }
        } else {
            AdmissionDecision::Accept
        }
    }
}
