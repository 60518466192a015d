//! Budget group domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// The budget bucket an expense category belongs to.
///
/// `Basic`, `Lifestyle` and `Savings` carry an allocation derived from the
/// salary. `Other` is tracked in totals but never capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetGroup {
    Basic,
    Lifestyle,
    Savings,
    Other,
}

/// Groups that receive a share of the salary, in display order.
pub const TRACKED_GROUPS: [BudgetGroup; 3] = [
    BudgetGroup::Basic,
    BudgetGroup::Lifestyle,
    BudgetGroup::Savings,
];

impl BudgetGroup {
    /// Whether this group carries an allocation cap.
    pub fn is_tracked(&self) -> bool {
        !matches!(self, BudgetGroup::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetGroup::Basic => "basic",
            BudgetGroup::Lifestyle => "lifestyle",
            BudgetGroup::Savings => "savings",
            BudgetGroup::Other => "other",
        }
    }

    /// Human readable group name used in messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            BudgetGroup::Basic => "Basic Needs",
            BudgetGroup::Lifestyle => "Lifestyle",
            BudgetGroup::Savings => "Savings",
            BudgetGroup::Other => "Other",
        }
    }

    /// Label stored with each expense, e.g. `"50% - Basic Needs"`.
    pub fn budget_type_label(&self) -> &'static str {
        match self {
            BudgetGroup::Basic => "50% - Basic Needs",
            BudgetGroup::Lifestyle => "30% - Lifestyle",
            BudgetGroup::Savings => "20% - Savings",
            BudgetGroup::Other => "Other",
        }
    }
}

impl fmt::Display for BudgetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetGroup {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(BudgetGroup::Basic),
            "lifestyle" => Ok(BudgetGroup::Lifestyle),
            "savings" => Ok(BudgetGroup::Savings),
            "other" => Ok(BudgetGroup::Other),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown budget group '{}'",
                other
            ))),
        }
    }
}

/// A registered category together with its group, as listed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    pub name: String,
    pub group: BudgetGroup,
    pub budget_type: String,
}
