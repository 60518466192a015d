//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use budgetwise_core::users::User;

use crate::errors::StorageError;

/// Database model for users. Salary is stored as decimal text.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub salary: String,
    pub cycle_start: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub salary: String,
    pub cycle_start: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

pub(crate) fn parse_stored_decimal(
    value: &str,
    column: &'static str,
) -> Result<Decimal, StorageError> {
    Decimal::from_str(value).map_err(|e| StorageError::CorruptValue {
        column,
        message: format!("'{}' is not a decimal: {}", value, e),
    })
}

impl TryFrom<UserDB> for User {
    type Error = StorageError;

    fn try_from(db: UserDB) -> Result<Self, Self::Error> {
        Ok(Self {
            salary: parse_stored_decimal(&db.salary, "users.salary")?,
            id: db.id,
            name: db.name,
            email: db.email,
            cycle_start: db.cycle_start,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}
