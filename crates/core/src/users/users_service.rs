use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::{debug, info};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::users_model::{validate_salary, NewUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::notifications::NotificationPolicy;
use crate::utils::time_utils::now_utc;

/// Service for user salary records and salary cycles.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    notification_policy: Arc<NotificationPolicy>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepositoryTrait>,
        notification_policy: Arc<NotificationPolicy>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            notification_policy,
            event_sink,
        }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        debug!("Creating user {} with salary {}", new_user.email, new_user.salary);
        self.repository.create(new_user, now_utc()).await
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    fn get_salary(&self, user_id: &str) -> Result<Decimal> {
        Ok(self.repository.get_by_id(user_id)?.salary)
    }

    async fn update_salary(&self, user_id: &str, salary: Decimal) -> Result<User> {
        validate_salary(salary)?;
        let previous = self.repository.get_by_id(user_id)?;
        let updated = self.repository.set_salary(user_id, salary).await?;

        // Percentages shift with the salary; alerts re-baseline on the next admission.
        self.notification_policy.reset(user_id);
        info!(
            "Salary for user {} changed from {} to {}",
            user_id, previous.salary, updated.salary
        );
        self.event_sink.emit(DomainEvent::salary_updated(
            user_id.to_string(),
            previous.salary,
            updated.salary,
        ));
        Ok(updated)
    }

    async fn reload_salary_cycle(&self, user_id: &str) -> Result<NaiveDateTime> {
        // Fail with not-found before touching anything.
        self.repository.get_by_id(user_id)?;
        let cycle_start = now_utc();
        let updated = self.repository.reload_cycle(user_id, cycle_start).await?;

        self.notification_policy.reset(user_id);
        info!(
            "Started new salary cycle for user {} at {}",
            user_id, updated.cycle_start
        );
        self.event_sink.emit(DomainEvent::salary_cycle_reloaded(
            user_id.to_string(),
            updated.cycle_start,
        ));
        Ok(updated.cycle_start)
    }
}
