//! Near-limit alert policy.
//!
//! An alert fires when a tracked group's remaining budget crosses from above
//! the threshold to at or below it. The last known `percent_used` per user and
//! group is remembered so repeated recomputations inside the zone stay silent.

use log::{debug, info};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::notification_model::NotificationEvent;
use crate::budget::AllocationSnapshot;
use crate::categories::BudgetGroup;
use crate::constants::NEAR_LIMIT_REMAINING_PCT;

#[derive(Default)]
pub struct NotificationPolicy {
    last_percent_used: Mutex<HashMap<String, HashMap<BudgetGroup, Decimal>>>,
}

impl NotificationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// `remaining / allocated * 100 <= 10` expressed on `percent_used`.
    fn is_near_limit(percent_used: Decimal) -> bool {
        Decimal::ONE_HUNDRED - percent_used <= Decimal::from(NEAR_LIMIT_REMAINING_PCT)
    }

    /// Compares `after` against the last known state and returns the alerts
    /// for groups that just crossed into the near-limit zone.
    ///
    /// Groups never seen before for this user are baselined from `before`,
    /// the snapshot the admission was validated against. Groups without an
    /// allocation are skipped.
    pub fn evaluate(
        &self,
        user_id: &str,
        before: &AllocationSnapshot,
        after: &AllocationSnapshot,
    ) -> Vec<NotificationEvent> {
        let mut state = self
            .last_percent_used
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let last_known = state.entry(user_id.to_string()).or_default();

        let mut alerts = Vec::new();
        for current in &after.groups {
            if current.allocated <= Decimal::ZERO {
                continue;
            }
            let previous = last_known.get(&current.group).copied().or_else(|| {
                before
                    .group(current.group)
                    .filter(|g| g.allocated > Decimal::ZERO)
                    .map(|g| g.percent_used)
            });

            let crossed = Self::is_near_limit(current.percent_used)
                && !previous.map(Self::is_near_limit).unwrap_or(false);
            if crossed {
                info!(
                    "User {} {} budget is {}% used",
                    user_id, current.group, current.percent_used
                );
                alerts.push(NotificationEvent::near_limit(
                    user_id,
                    current.group,
                    current.percent_used,
                ));
            } else {
                debug!(
                    "No alert for user {} {}: previous {:?}, current {}",
                    user_id, current.group, previous, current.percent_used
                );
            }
            last_known.insert(current.group, current.percent_used);
        }
        alerts
    }

    /// Forgets the remembered state for a user, e.g. after a salary change or
    /// cycle reload.
    pub fn reset(&self, user_id: &str) {
        self.last_percent_used
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(user_id);
    }
}
