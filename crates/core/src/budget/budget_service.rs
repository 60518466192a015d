use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::admission::AdmissionController;
use super::budget_engine::BudgetEngine;
use super::budget_model::{AcceptedExpense, AllocationSnapshot};
use super::budget_traits::BudgetServiceTrait;
use crate::categories::{BudgetGroup, CategoryRegistry};
use crate::errors::{Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::expenses::{DateRange, ExpenseRecord, ExpenseRepositoryTrait, NewExpense};
use crate::notifications::{NotificationDeliveryTrait, NotificationPolicy};
use crate::users::{User, UserRepositoryTrait};
use crate::utils::time_utils::today_utc;

/// Service driving expense admission and snapshot reads.
pub struct BudgetService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    notification_policy: Arc<NotificationPolicy>,
    notification_delivery: Arc<dyn NotificationDeliveryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    registry: CategoryRegistry,
    engine: BudgetEngine,
    admission: AdmissionController,
}

impl BudgetService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        notification_policy: Arc<NotificationPolicy>,
        notification_delivery: Arc<dyn NotificationDeliveryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            user_repository,
            expense_repository,
            notification_policy,
            notification_delivery,
            event_sink,
            registry: CategoryRegistry::new(),
            engine: BudgetEngine::default(),
            admission: AdmissionController::new(),
        }
    }

    fn snapshot_for(&self, user: &User) -> Result<AllocationSnapshot> {
        let records = self
            .expense_repository
            .query_recorded_since(&user.id, user.cycle_start)?;
        self.engine.compute_snapshot(user, &records)
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn add_expense(&self, input: NewExpense) -> Result<AcceptedExpense> {
        // Input errors win over budget state and unknown users.
        let prospective = input.into_record(today_utc())?;
        let user = self.user_repository.get_by_id(&prospective.user_id)?;

        let before = self.snapshot_for(&user)?;
        self.admission
            .validate(&prospective, &before)
            .into_result()?;
        // Totals must stay representable once the record is in the ledger.
        self.engine
            .project(&before, prospective.budget_group, prospective.amount)
            .map_err(|_| ValidationError::TotalOutOfRange(prospective.amount))?;

        let record = self.expense_repository.append(prospective).await?;
        debug!(
            "Appended expense {} ({} {}) for user {}",
            record.id, record.amount, record.category, record.user_id
        );

        let after = self.snapshot_for(&user)?;
        let alerts = self.notification_policy.evaluate(&user.id, &before, &after);
        for alert in &alerts {
            // The record is already committed; a delivery failure must not undo it.
            if let Err(e) = self.notification_delivery.deliver(alert).await {
                warn!(
                    "Failed to deliver {} alert to user {}: {}",
                    alert.group, alert.user_id, e
                );
            }
        }

        self.event_sink.emit(DomainEvent::expense_added(
            record.user_id.clone(),
            record.id.clone(),
            self.registry.classify(&record.category),
            record.amount,
        ));

        Ok(AcceptedExpense {
            record,
            snapshot: after,
            alerts,
        })
    }

    fn get_snapshot(&self, user_id: &str) -> Result<AllocationSnapshot> {
        let user = self.user_repository.get_by_id(user_id)?;
        self.snapshot_for(&user)
    }

    fn list_expenses(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<ExpenseRecord>> {
        self.user_repository.get_by_id(user_id)?;
        let range = range.unwrap_or_else(|| DateRange::last_days_until(today_utc()));
        self.expense_repository.query(user_id, &range)
    }

    fn classify(&self, category: &str) -> BudgetGroup {
        self.registry.classify(category)
    }
}
