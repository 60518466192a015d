//! Fixed percentage weights per budget group.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::allocation_model::GroupAllocation;
use crate::categories::{BudgetGroup, TRACKED_GROUPS};
use crate::constants::DISPLAY_DECIMAL_PRECISION;

const BASIC_WEIGHT: Decimal = dec!(0.50);
const LIFESTYLE_WEIGHT: Decimal = dec!(0.30);
const SAVINGS_WEIGHT: Decimal = dec!(0.20);

/// The 50/30/20 allocation rule.
///
/// Amounts are kept as unrounded decimals. The weights are exact decimal
/// fractions summing to one, so the three allocations always add back up to
/// the salary; rounding happens only through [`round_for_display`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocationPolicy;

impl AllocationPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Weight of a group. `Other` carries no allocation.
    pub fn weight(&self, group: BudgetGroup) -> Decimal {
        match group {
            BudgetGroup::Basic => BASIC_WEIGHT,
            BudgetGroup::Lifestyle => LIFESTYLE_WEIGHT,
            BudgetGroup::Savings => SAVINGS_WEIGHT,
            BudgetGroup::Other => Decimal::ZERO,
        }
    }

    pub fn allocated(&self, group: BudgetGroup, salary: Decimal) -> Decimal {
        salary * self.weight(group)
    }

    /// Allocations for the tracked groups in display order.
    pub fn allocate(&self, salary: Decimal) -> Vec<GroupAllocation> {
        TRACKED_GROUPS
            .iter()
            .map(|group| GroupAllocation {
                group: *group,
                weight: self.weight(*group),
                allocated: self.allocated(*group, salary),
            })
            .collect()
    }
}

/// Rounds an amount to display precision, midpoints away from zero.
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let policy = AllocationPolicy::new();
        let total: Decimal = TRACKED_GROUPS.iter().map(|g| policy.weight(*g)).sum();
        assert_eq!(total, Decimal::ONE);
        assert_eq!(policy.weight(BudgetGroup::Other), Decimal::ZERO);
    }

    #[test]
    fn test_allocate_ten_thousand() {
        let allocations = AllocationPolicy::new().allocate(dec!(10000));
        assert_eq!(allocations.len(), 3);
        assert_eq!(allocations[0].group, BudgetGroup::Basic);
        assert_eq!(allocations[0].allocated, dec!(5000));
        assert_eq!(allocations[1].allocated, dec!(3000));
        assert_eq!(allocations[2].allocated, dec!(2000));
    }

    #[test]
    fn test_allocation_is_not_rounded() {
        let policy = AllocationPolicy::new();
        let salary = dec!(1000.03);
        assert_eq!(policy.allocated(BudgetGroup::Basic, salary), dec!(500.015));
        assert_eq!(policy.allocated(BudgetGroup::Lifestyle, salary), dec!(300.009));
        assert_eq!(policy.allocated(BudgetGroup::Savings, salary), dec!(200.006));
        let total: Decimal = policy.allocate(salary).iter().map(|a| a.allocated).sum();
        assert_eq!(total, salary);
    }

    #[test]
    fn test_zero_salary_allocates_zero() {
        let total: Decimal = AllocationPolicy::new()
            .allocate(Decimal::ZERO)
            .iter()
            .map(|a| a.allocated)
            .sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_round_for_display() {
        assert_eq!(round_for_display(dec!(500.015)), dec!(500.02));
        assert_eq!(round_for_display(dec!(-0.005)), dec!(-0.01));
        assert_eq!(round_for_display(dec!(12.344)), dec!(12.34));
    }
}
