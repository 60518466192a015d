use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use budgetwise_core::expenses::{DateRange, ExpenseRecord, ExpenseRepositoryTrait, NewExpenseRecord};
use budgetwise_core::utils::time_utils::now_utc;
use budgetwise_core::Result;

use super::model::{ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::expenses;

/// Append-only expense ledger backed by the `expenses` table.
///
/// Ids are UUIDv7 and `created_at` is stamped inside the writer actor, so
/// insertion order and `(created_at, id)` order agree.
pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ExpenseRepository { pool, writer }
    }

    fn load(rows: Vec<ExpenseDB>) -> Result<Vec<ExpenseRecord>> {
        rows.into_iter()
            .map(|row| ExpenseRecord::try_from(row).into_core())
            .collect()
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    async fn append(&self, record: NewExpenseRecord) -> Result<ExpenseRecord> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ExpenseRecord> {
                let row = NewExpenseDB::from_domain(record, Uuid::now_v7().to_string(), now_utc());
                let stored = diesel::insert_into(expenses::table)
                    .values(&row)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                debug!("Appended expense {} for user {}", stored.id, stored.user_id);
                ExpenseRecord::try_from(stored).into_core()
            })
            .await
    }

    fn query(&self, user_id: &str, range: &DateRange) -> Result<Vec<ExpenseRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .select(ExpenseDB::as_select())
            .into_boxed();
        if let Some(from) = range.from {
            query = query.filter(expenses::expense_date.ge(from));
        }
        if let Some(to) = range.to {
            query = query.filter(expenses::expense_date.le(to));
        }
        let rows = query
            .order((expenses::created_at.asc(), expenses::id.asc()))
            .load::<ExpenseDB>(&mut conn)
            .into_core()?;
        Self::load(rows)
    }

    fn query_recorded_since(
        &self,
        user_id: &str,
        since: NaiveDateTime,
    ) -> Result<Vec<ExpenseRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::created_at.ge(since))
            .order((expenses::created_at.asc(), expenses::id.asc()))
            .select(ExpenseDB::as_select())
            .load::<ExpenseDB>(&mut conn)
            .into_core()?;
        Self::load(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use crate::users::UserRepository;
    use budgetwise_core::categories::classify;
    use budgetwise_core::users::{NewUser, UserRepositoryTrait};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    struct TestStore {
        users: UserRepository,
        expenses: ExpenseRepository,
        user_id: String,
        _temp_dir: tempfile::TempDir,
    }

    async fn create_test_store() -> TestStore {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        let users = UserRepository::new(Arc::clone(&pool), writer.clone());
        let user = users
            .create(
                NewUser {
                    id: None,
                    name: "Asha".to_string(),
                    email: "asha@example.com".to_string(),
                    salary: dec!(10000),
                },
                now_utc(),
            )
            .await
            .expect("Failed to create user");

        TestStore {
            users,
            expenses: ExpenseRepository::new(pool, writer),
            user_id: user.id,
            _temp_dir: temp_dir,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn new_record(user_id: &str, category: &str, amount: Decimal, date: NaiveDate) -> NewExpenseRecord {
        let group = classify(category);
        NewExpenseRecord {
            user_id: user_id.to_string(),
            amount,
            category: category.to_string(),
            budget_group: group,
            budget_type: group.budget_type_label().to_string(),
            note: Some("weekly shop".to_string()),
            expense_date: date,
        }
    }

    #[tokio::test]
    async fn test_append_preserves_exact_amount_and_fields() {
        let store = create_test_store().await;
        let stored = store
            .expenses
            .append(new_record(&store.user_id, "Groceries", dec!(0.10), d(2024, 1, 10)))
            .await
            .unwrap();
        assert_eq!(stored.amount, dec!(0.10));
        assert_eq!(stored.budget_type, "50% - Basic Needs");
        assert_eq!(stored.note.as_deref(), Some("weekly shop"));

        let all = store.expenses.query(&store.user_id, &DateRange::all()).unwrap();
        assert_eq!(all, vec![stored]);
    }

    #[tokio::test]
    async fn test_query_returns_insertion_order_and_respects_range() {
        let store = create_test_store().await;
        let dates = [d(2024, 3, 5), d(2024, 1, 1), d(2024, 2, 14)];
        let mut ids = Vec::new();
        for (i, date) in dates.iter().enumerate() {
            let record = store
                .expenses
                .append(new_record(&store.user_id, "Shopping", Decimal::from(i + 1), *date))
                .await
                .unwrap();
            ids.push(record.id);
        }

        let all = store.expenses.query(&store.user_id, &DateRange::all()).unwrap();
        let all_ids: Vec<String> = all.iter().map(|r| r.id.clone()).collect();
        assert_eq!(all_ids, ids);

        let february = DateRange::new(Some(d(2024, 2, 1)), Some(d(2024, 2, 29))).unwrap();
        let in_range = store.expenses.query(&store.user_id, &february).unwrap();
        assert_eq!(in_range.len(), 1);
        assert_eq!(in_range[0].expense_date, d(2024, 2, 14));

        // Inclusive bounds
        let exact = DateRange::new(Some(d(2024, 1, 1)), Some(d(2024, 1, 1))).unwrap();
        assert_eq!(store.expenses.query(&store.user_id, &exact).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_recorded_since_scopes_to_cycle() {
        let store = create_test_store().await;
        store
            .expenses
            .append(new_record(&store.user_id, "Groceries", dec!(40), d(2024, 1, 2)))
            .await
            .unwrap();

        let cycle_start = now_utc();
        store.users.reload_cycle(&store.user_id, cycle_start).await.unwrap();
        let after = store
            .expenses
            .append(new_record(&store.user_id, "Utilities", dec!(60), d(2024, 1, 3)))
            .await
            .unwrap();

        let in_cycle = store
            .expenses
            .query_recorded_since(&store.user_id, cycle_start)
            .unwrap();
        assert_eq!(in_cycle, vec![after]);
        assert_eq!(
            store.expenses.query(&store.user_id, &DateRange::all()).unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_append_for_unknown_user_is_rejected() {
        let store = create_test_store().await;
        let err = store
            .expenses
            .append(new_record("ghost", "Groceries", dec!(1), d(2024, 1, 1)))
            .await
            .unwrap_err();
        assert!(err.is_conflict(), "{:?}", err);
        assert!(store.expenses.query("ghost", &DateRange::all()).unwrap().is_empty());
    }
}
