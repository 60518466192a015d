//! Deterministic tips computed from the snapshot, used when no model-backed
//! provider is configured.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::suggestions_model::SuggestionContext;
use super::suggestions_traits::SuggestionProviderTrait;
use crate::allocation::round_for_display;
use crate::budget::GroupSnapshot;
use crate::categories::{BudgetGroup, CategoryRegistry};
use crate::constants::NEAR_LIMIT_REMAINING_PCT;
use crate::errors::Result;
use crate::expenses::ExpenseRecord;

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedSuggestionProvider {
    registry: CategoryRegistry,
}

impl RuleBasedSuggestionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest-spend category in `group` this cycle; ties go to the name
    /// that sorts first.
    fn top_category<'a>(&self, records: &'a [ExpenseRecord], group: BudgetGroup) -> Option<&'a str> {
        let mut totals: HashMap<&str, Decimal> = HashMap::new();
        for record in records {
            if self.registry.classify(&record.category) == group {
                let total = totals.entry(record.category.as_str()).or_insert(Decimal::ZERO);
                *total = total.saturating_add(record.amount);
            }
        }
        totals
            .into_iter()
            .max_by(|(a_name, a_total), (b_name, b_total)| {
                a_total.cmp(b_total).then_with(|| b_name.cmp(a_name))
            })
            .map(|(name, _)| name)
    }

    fn most_used(groups: &[GroupSnapshot]) -> Option<&GroupSnapshot> {
        groups
            .iter()
            .filter(|g| g.allocated > Decimal::ZERO)
            .max_by(|a, b| a.percent_used.cmp(&b.percent_used))
    }

    fn compose(&self, context: SuggestionContext<'_>) -> String {
        let snapshot = context.snapshot;
        let records = context.records_in_cycle;
        let near_limit = Decimal::ONE_HUNDRED - Decimal::from(NEAR_LIMIT_REMAINING_PCT);

        if let Some(group) = Self::most_used(&snapshot.groups) {
            let top = self.top_category(records, group.group);
            if group.percent_used >= Decimal::ONE_HUNDRED {
                return match top {
                    Some(category) => format!(
                        "Your {} budget is fully used. Hold off on {} until your next salary cycle.",
                        group.group.display_name(),
                        category
                    ),
                    None => format!(
                        "Your {} budget is fully used. Hold off on new spending there until your next salary cycle.",
                        group.group.display_name()
                    ),
                };
            }
            if group.percent_used >= near_limit {
                let pct = round_for_display(group.percent_used).round();
                return match top {
                    Some(category) => format!(
                        "Your {} budget is {}% used. Trimming {} would keep you inside it this cycle.",
                        group.group.display_name(),
                        pct,
                        category
                    ),
                    None => format!(
                        "Your {} budget is {}% used. Keep the rest of this cycle light.",
                        group.group.display_name(),
                        pct
                    ),
                };
            }
        }

        if snapshot.other_spent > Decimal::ZERO {
            if let Some(category) = self.top_category(records, BudgetGroup::Other) {
                return format!(
                    "You spent {} on expenses outside your budget groups, mostly {}. Filing them under a budget category makes them count against a limit.",
                    round_for_display(snapshot.other_spent),
                    category
                );
            }
        }

        if let Some(savings) = snapshot.group(BudgetGroup::Savings) {
            if savings.allocated > Decimal::ZERO && savings.remaining > Decimal::ZERO {
                return format!(
                    "You still have {} of your Savings allocation left. Moving it into your Emergency Fund early keeps it from being spent.",
                    round_for_display(savings.remaining)
                );
            }
        }

        "Your spending is within every budget group. Keep it up!".to_string()
    }
}

#[async_trait]
impl SuggestionProviderTrait for RuleBasedSuggestionProvider {
    async fn suggest(&self, context: SuggestionContext<'_>) -> Result<String> {
        Ok(self.compose(context))
    }
}
