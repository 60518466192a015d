use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::BudgetGroup;

/// Share of the salary assigned to one tracked group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAllocation {
    pub group: BudgetGroup,
    pub weight: Decimal,
    pub allocated: Decimal,
}
