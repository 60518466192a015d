use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::aggregation_engine::AggregationEngine;
use super::analytics_model::{CategoryBreakdown, CategoryTotal, Interval, SeriesPoint};
use super::analytics_traits::AnalyticsServiceTrait;
use crate::errors::Result;
use crate::expenses::{DateRange, ExpenseRecord, ExpenseRepositoryTrait};
use crate::users::UserRepositoryTrait;
use crate::utils::money_utils;

pub struct AnalyticsService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    engine: AggregationEngine,
}

impl AnalyticsService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        Self {
            user_repository,
            expense_repository,
            engine: AggregationEngine::new(),
        }
    }

    fn history(&self, user_id: &str) -> Result<Vec<ExpenseRecord>> {
        self.user_repository.get_by_id(user_id)?;
        self.expense_repository.query(user_id, &DateRange::all())
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_series(&self, user_id: &str, interval: Interval) -> Result<Vec<SeriesPoint>> {
        let records = self.history(user_id)?;
        debug!(
            "Bucketing {} records for user {} by {}",
            records.len(),
            user_id,
            interval
        );
        self.engine.bucket(&records, interval)
    }

    fn get_category_breakdown(&self, user_id: &str) -> Result<CategoryBreakdown> {
        let records = self.history(user_id)?;

        let mut per_category: HashMap<&str, Decimal> = HashMap::new();
        let mut total = Decimal::ZERO;
        for record in &records {
            let entry = per_category
                .entry(record.category.as_str())
                .or_insert(Decimal::ZERO);
            *entry = money_utils::add(*entry, record.amount, "category total")?;
            total = money_utils::add(total, record.amount, "breakdown total")?;
        }

        let mut categories: Vec<CategoryTotal> = per_category
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total,
            })
            .collect();
        categories.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(CategoryBreakdown { total, categories })
    }
}
