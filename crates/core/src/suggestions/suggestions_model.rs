use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::budget::AllocationSnapshot;
use crate::expenses::ExpenseRecord;

/// A stored tip, shown newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub user_id: String,
    pub suggestion: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSuggestion {
    pub user_id: String,
    pub suggestion: String,
}

/// What a provider gets to look at: the current cycle only.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionContext<'a> {
    pub snapshot: &'a AllocationSnapshot,
    pub records_in_cycle: &'a [ExpenseRecord],
}
