use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::BudgetGroup;

/// An alert handed to the notification-delivery collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    pub user_id: String,
    pub group: BudgetGroup,
    pub title: String,
    pub body: String,
    pub percent_used: Decimal,
}

impl NotificationEvent {
    /// Alert raised when a group's remaining budget drops to the threshold.
    pub fn near_limit(user_id: &str, group: BudgetGroup, percent_used: Decimal) -> Self {
        let body = match group {
            BudgetGroup::Basic => "Your Basic Needs budget is almost exhausted!",
            BudgetGroup::Lifestyle => "Your Lifestyle budget is nearly complete!",
            BudgetGroup::Savings => "Your Savings allocation is about to finish!",
            BudgetGroup::Other => "Your budget is almost used.",
        };
        Self {
            user_id: user_id.to_string(),
            group,
            title: "Budget Almost Used".to_string(),
            body: body.to_string(),
            percent_used,
        }
    }
}
