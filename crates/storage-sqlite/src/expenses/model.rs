//! Database models for the expense ledger.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use budgetwise_core::categories::BudgetGroup;
use budgetwise_core::expenses::{ExpenseRecord, NewExpenseRecord};

use crate::errors::StorageError;
use crate::users::model::parse_stored_decimal;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: String,
    pub user_id: String,
    pub amount: String,
    pub category: String,
    pub budget_group: String,
    pub budget_type: String,
    pub note: Option<String>,
    pub expense_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpenseDB {
    pub id: String,
    pub user_id: String,
    pub amount: String,
    pub category: String,
    pub budget_group: String,
    pub budget_type: String,
    pub note: Option<String>,
    pub expense_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl NewExpenseDB {
    pub fn from_domain(record: NewExpenseRecord, id: String, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            user_id: record.user_id,
            amount: record.amount.to_string(),
            category: record.category,
            budget_group: record.budget_group.as_str().to_string(),
            budget_type: record.budget_type,
            note: record.note,
            expense_date: record.expense_date,
            created_at,
        }
    }
}

impl TryFrom<ExpenseDB> for ExpenseRecord {
    type Error = StorageError;

    fn try_from(db: ExpenseDB) -> Result<Self, Self::Error> {
        let budget_group = db
            .budget_group
            .parse::<BudgetGroup>()
            .map_err(|e| StorageError::CorruptValue {
                column: "expenses.budget_group",
                message: e.to_string(),
            })?;
        Ok(Self {
            amount: parse_stored_decimal(&db.amount, "expenses.amount")?,
            id: db.id,
            user_id: db.user_id,
            category: db.category,
            budget_group,
            budget_type: db.budget_type,
            note: db.note,
            expense_date: db.expense_date,
            created_at: db.created_at,
        })
    }
}
