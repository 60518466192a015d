use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use budgetwise_core::users::{NewUser, User, UserRepositoryTrait};
use budgetwise_core::utils::time_utils::now_utc;
use budgetwise_core::{Error, Result};

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::users;

/// Salary store backed by the `users` table.
pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

fn not_found(user_id: &str) -> Error {
    Error::NotFound(format!("User {}", user_id))
}

/// Runs an UPDATE ... RETURNING and maps a missing row to `NotFound`.
fn returning_user(result: QueryResult<Option<UserDB>>, user_id: &str) -> Result<User> {
    let row = result.into_core()?.ok_or_else(|| not_found(user_id))?;
    User::try_from(row).into_core()
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(&self, new_user: NewUser, created_at: NaiveDateTime) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let row = NewUserDB {
                    id: new_user
                        .id
                        .filter(|id| !id.trim().is_empty())
                        .unwrap_or_else(|| Uuid::now_v7().to_string()),
                    name: new_user.name.trim().to_string(),
                    email: new_user.email.trim().to_string(),
                    salary: new_user.salary.to_string(),
                    cycle_start: created_at,
                    created_at,
                    updated_at: created_at,
                };
                debug!("Inserting user {}", row.id);
                let stored = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                User::try_from(stored).into_core()
            })
            .await
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| not_found(user_id))?;
        User::try_from(row).into_core()
    }

    async fn set_salary(&self, user_id: &str, salary: Decimal) -> Result<User> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let result = diesel::update(users::table.find(&user_id))
                    .set((
                        users::salary.eq(salary.to_string()),
                        users::updated_at.eq(now_utc()),
                    ))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .optional();
                returning_user(result, &user_id)
            })
            .await
    }

    async fn reload_cycle(&self, user_id: &str, cycle_start: NaiveDateTime) -> Result<User> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let result = diesel::update(users::table.find(&user_id))
                    .set((
                        users::cycle_start.eq(cycle_start),
                        users::updated_at.eq(cycle_start),
                    ))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .optional();
                returning_user(result, &user_id)
            })
            .await
    }
}
