//! Expense ledger domain models.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::categories::{classify, BudgetGroup};
use crate::constants::DEFAULT_HISTORY_DAYS;
use crate::errors::{Result, ValidationError};
use crate::utils::money_utils::check_money_bounds;

/// A committed ledger entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    pub category: String,
    /// Group the category classified into when the record was written
    pub budget_group: BudgetGroup,
    pub budget_type: String,
    pub note: Option<String>,
    pub expense_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Caller input for `add_expense`.
///
/// The amount arrives as raw text so that non-numeric input is reported as
/// a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub user_id: String,
    pub amount: String,
    pub category: String,
    pub note: Option<String>,
    pub expense_date: Option<NaiveDate>,
}

/// A validated, classified expense ready to be appended.
/// The ledger assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseRecord {
    pub user_id: String,
    pub amount: Decimal,
    pub category: String,
    pub budget_group: BudgetGroup,
    pub budget_type: String,
    pub note: Option<String>,
    pub expense_date: NaiveDate,
}

impl NewExpense {
    /// Validates the input and classifies its category.
    pub fn into_record(self, default_date: NaiveDate) -> Result<NewExpenseRecord> {
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::MissingField("userId".to_string()).into());
        }
        let amount = parse_amount(&self.amount)?;
        let budget_group = classify(&self.category);
        let note = self
            .note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(NewExpenseRecord {
            user_id: self.user_id,
            amount,
            budget_type: budget_group.budget_type_label().to_string(),
            budget_group,
            category: self.category,
            note,
            expense_date: self.expense_date.unwrap_or(default_date),
        })
    }
}

/// Parses a user-entered amount as an exact decimal.
///
/// Empty, non-numeric, zero and negative inputs are validation errors, as
/// are amounts beyond the accepted size or precision.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("amount".to_string()).into());
    }
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount).into());
    }
    check_money_bounds(amount)?;
    Ok(amount)
}

/// Inclusive calendar-date bounds on `expense_date`. Open ends are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self> {
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                return Err(ValidationError::InvalidDateRange {
                    from: f.to_string(),
                    to: t.to_string(),
                }
                .into());
            }
        }
        Ok(Self { from, to })
    }

    /// The whole ledger.
    pub fn all() -> Self {
        Self::default()
    }

    /// The default history window: the last 30 days up to `today`.
    pub fn last_days_until(today: NaiveDate) -> Self {
        Self {
            from: Some(today - Duration::days(DEFAULT_HISTORY_DAYS)),
            to: Some(today),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |f| date >= f) && self.to.map_or(true, |t| date <= t)
    }
}
