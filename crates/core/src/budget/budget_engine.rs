//! Derives allocation snapshots from a salary and cycle-scoped ledger entries.

use rust_decimal::Decimal;
use std::collections::HashMap;

use super::budget_model::{AllocationSnapshot, GroupSnapshot};
use crate::allocation::AllocationPolicy;
use crate::categories::{BudgetGroup, CategoryRegistry};
use crate::errors::Result;
use crate::expenses::ExpenseRecord;
use crate::users::User;
use crate::utils::money_utils;

/// Pure snapshot computation. Holds no state besides its policy tables.
///
/// All sums are checked; a ledger whose totals do not fit a decimal yields
/// `Error::Arithmetic` instead of a partial snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetEngine {
    registry: CategoryRegistry,
    policy: AllocationPolicy,
}

impl BudgetEngine {
    pub fn new(registry: CategoryRegistry, policy: AllocationPolicy) -> Self {
        Self { registry, policy }
    }

    /// Single pass over `records_in_cycle`, summing amounts per group.
    ///
    /// Groups are resolved through the registry at read time, so every
    /// snapshot agrees with `classify` regardless of what was stored.
    pub fn compute_snapshot(
        &self,
        user: &User,
        records_in_cycle: &[ExpenseRecord],
    ) -> Result<AllocationSnapshot> {
        let mut spent: HashMap<BudgetGroup, Decimal> = HashMap::new();
        let mut total_spent = Decimal::ZERO;
        for record in records_in_cycle {
            let entry = spent
                .entry(self.registry.classify(&record.category))
                .or_insert(Decimal::ZERO);
            *entry = money_utils::add(*entry, record.amount, "group spend")?;
            total_spent = money_utils::add(total_spent, record.amount, "total spend")?;
        }

        let groups = self
            .policy
            .allocate(user.salary)
            .into_iter()
            .map(|allocation| {
                GroupSnapshot::new(
                    allocation.group,
                    allocation.allocated,
                    spent.get(&allocation.group).copied().unwrap_or(Decimal::ZERO),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(AllocationSnapshot {
            user_id: user.id.clone(),
            salary: user.salary,
            cycle_start: user.cycle_start,
            groups,
            other_spent: spent
                .get(&BudgetGroup::Other)
                .copied()
                .unwrap_or(Decimal::ZERO),
            total_spent,
            remaining_salary: money_utils::sub(user.salary, total_spent, "remaining salary")?,
        })
    }

    /// The snapshot `snapshot` would become once `amount` is booked against
    /// `group`. Used to reject an expense whose totals would not fit before
    /// anything is written.
    pub fn project(
        &self,
        snapshot: &AllocationSnapshot,
        group: BudgetGroup,
        amount: Decimal,
    ) -> Result<AllocationSnapshot> {
        let mut projected = snapshot.clone();
        match projected.groups.iter_mut().find(|g| g.group == group) {
            Some(tracked) => {
                let spent = money_utils::add(tracked.spent, amount, "group spend")?;
                *tracked = GroupSnapshot::new(tracked.group, tracked.allocated, spent)?;
            }
            None => {
                projected.other_spent =
                    money_utils::add(projected.other_spent, amount, "group spend")?;
            }
        }
        projected.total_spent = money_utils::add(projected.total_spent, amount, "total spend")?;
        projected.remaining_salary =
            money_utils::sub(projected.salary, projected.total_spent, "remaining salary")?;
        Ok(projected)
    }
}
