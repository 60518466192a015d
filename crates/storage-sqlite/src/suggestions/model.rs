use chrono::NaiveDateTime;
use diesel::prelude::*;

use budgetwise_core::suggestions::Suggestion;

#[derive(Queryable, Identifiable, Selectable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::suggestions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SuggestionDB {
    pub id: String,
    pub user_id: String,
    pub suggestion: String,
    pub created_at: NaiveDateTime,
}

impl From<SuggestionDB> for Suggestion {
    fn from(db: SuggestionDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            suggestion: db.suggestion,
            created_at: db.created_at,
        }
    }
}
