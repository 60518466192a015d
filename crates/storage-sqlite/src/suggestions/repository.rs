use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use budgetwise_core::suggestions::{NewSuggestion, Suggestion, SuggestionRepositoryTrait};
use budgetwise_core::utils::time_utils::now_utc;
use budgetwise_core::Result;

use super::model::SuggestionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::suggestions;

pub struct SuggestionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SuggestionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SuggestionRepository { pool, writer }
    }
}

#[async_trait]
impl SuggestionRepositoryTrait for SuggestionRepository {
    async fn insert(&self, suggestion: NewSuggestion) -> Result<Suggestion> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Suggestion> {
                let row = SuggestionDB {
                    id: Uuid::now_v7().to_string(),
                    user_id: suggestion.user_id,
                    suggestion: suggestion.suggestion,
                    created_at: now_utc(),
                };
                diesel::insert_into(suggestions::table)
                    .values(&row)
                    .returning(SuggestionDB::as_returning())
                    .get_result(conn)
                    .map(Suggestion::from)
                    .into_core()
            })
            .await
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Suggestion>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = suggestions::table
            .filter(suggestions::user_id.eq(user_id))
            .order((suggestions::created_at.desc(), suggestions::id.desc()))
            .select(SuggestionDB::as_select())
            .load::<SuggestionDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Suggestion::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use crate::users::UserRepository;
    use budgetwise_core::users::{NewUser, UserRepositoryTrait};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_insert_and_list_newest_first() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        let users = UserRepository::new(pool.clone(), writer.clone());
        let repo = SuggestionRepository::new(pool.clone(), writer);
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
            .unwrap();

        for text in ["first tip", "second tip"] {
            repo.insert(NewSuggestion {
                user_id: user.id.clone(),
                suggestion: text.to_string(),
            })
            .await
            .unwrap();
        }

        let listed = repo.list_for_user(&user.id).unwrap();
        let texts: Vec<&str> = listed.iter().map(|s| s.suggestion.as_str()).collect();
        assert_eq!(texts, vec!["second tip", "first tip"]);
        assert!(repo.list_for_user("someone-else").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_violates_foreign_key() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let repo = SuggestionRepository::new(pool.clone(), spawn_writer((*pool).clone()));

        let err = repo
            .insert(NewSuggestion {
                user_id: "ghost".to_string(),
                suggestion: "tip".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }
}
