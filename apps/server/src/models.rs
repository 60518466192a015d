//! Request and response bodies for the HTTP API.
//!
//! Amounts are decimal strings on the wire. Snapshot amounts are rounded
//! for display; the engine keeps the exact values.

use budgetwise_core::allocation::round_for_display;
use budgetwise_core::budget::{AcceptedExpense, AllocationSnapshot, GroupSnapshot};
use budgetwise_core::categories::BudgetGroup;
use budgetwise_core::errors::{Error, ValidationError};
use budgetwise_core::expenses::ExpenseRecord;
use budgetwise_core::notifications::NotificationEvent;
use budgetwise_core::suggestions::Suggestion;
use budgetwise_core::users::{parse_salary, NewUser};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub salary: String,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = Error;

    fn try_from(req: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(NewUser {
            id: req.id,
            name: req.name,
            email: req.email,
            salary: parse_salary(&req.salary)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateSalaryRequest {
    pub salary: String,
}

#[derive(Debug, Serialize)]
pub struct SalaryResponse {
    pub salary: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    pub cycle_start: NaiveDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSnapshotView {
    pub group: BudgetGroup,
    pub label: &'static str,
    pub budget_type: &'static str,
    pub allocated: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// Clamped to 0..=100 for progress bars
    pub percent_used: Decimal,
    pub percent_used_raw: Decimal,
}

impl From<&GroupSnapshot> for GroupSnapshotView {
    fn from(g: &GroupSnapshot) -> Self {
        Self {
            group: g.group,
            label: g.group.display_name(),
            budget_type: g.group.budget_type_label(),
            allocated: round_for_display(g.allocated),
            spent: round_for_display(g.spent),
            remaining: round_for_display(g.remaining),
            percent_used: g.percent_used_display(),
            percent_used_raw: round_for_display(g.percent_used),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotView {
    pub user_id: String,
    pub salary: Decimal,
    pub cycle_start: NaiveDateTime,
    pub groups: Vec<GroupSnapshotView>,
    pub other_spent: Decimal,
    pub total_spent: Decimal,
    pub remaining_salary: Decimal,
}

impl From<&AllocationSnapshot> for SnapshotView {
    fn from(s: &AllocationSnapshot) -> Self {
        Self {
            user_id: s.user_id.clone(),
            salary: s.salary,
            cycle_start: s.cycle_start,
            groups: s.groups.iter().map(GroupSnapshotView::from).collect(),
            other_spent: round_for_display(s.other_spent),
            total_spent: round_for_display(s.total_spent),
            remaining_salary: round_for_display(s.remaining_salary),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExpenseResponse {
    pub record: ExpenseRecord,
    pub snapshot: SnapshotView,
    pub alerts: Vec<NotificationEvent>,
}

impl From<AcceptedExpense> for AddExpenseResponse {
    fn from(accepted: AcceptedExpense) -> Self {
        Self {
            snapshot: SnapshotView::from(&accepted.snapshot),
            record: accepted.record,
            alerts: accepted.alerts,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    pub interval: Option<String>,
}

impl SeriesQuery {
    pub fn required_interval(&self) -> Result<&str, ValidationError> {
        self.interval
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ValidationError::MissingField("interval".to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub category: String,
    pub group: BudgetGroup,
    pub budget_type: &'static str,
    pub tracked: bool,
    /// False for names outside the category table
    pub registered: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSuggestionRequest {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}
