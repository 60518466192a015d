//! User domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Result, ValidationError};
use crate::utils::money_utils::check_money_bounds;

/// A budget owner and their salary record.
///
/// `cycle_start` scopes which ledger entries count as "spent". It is set at
/// creation and moved forward by a cycle reload; the salary itself is only
/// changed through an explicit salary update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub salary: Decimal,
    pub cycle_start: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for registering a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub salary: Decimal,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email".to_string()).into());
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidInput(format!(
                "'{}' is not an email address",
                self.email
            ))
            .into());
        }
        validate_salary(self.salary)
    }
}

/// Parses a user-entered salary. Zero is allowed, negatives are not.
pub fn parse_salary(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("salary".to_string()).into());
    }
    let salary = Decimal::from_str(trimmed)
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
    validate_salary(salary)?;
    Ok(salary)
}

pub(crate) fn validate_salary(salary: Decimal) -> Result<()> {
    if salary < Decimal::ZERO {
        return Err(ValidationError::NegativeSalary(salary).into());
    }
    check_money_bounds(salary)
}
