//! User repository and service traits.
//!
//! The repository is the salary-store collaborator: it owns the salary and
//! the cycle-start baseline, without any database-specific types.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::users_model::{NewUser, User};
use crate::errors::Result;

/// Trait defining the contract for the salary store.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Creates a user whose salary cycle starts at `created_at`.
    async fn create(&self, new_user: NewUser, created_at: NaiveDateTime) -> Result<User>;

    /// Retrieves a user by ID. Unknown IDs yield a not-found error.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Replaces the salary, leaving the cycle start untouched.
    async fn set_salary(&self, user_id: &str, salary: Decimal) -> Result<User>;

    /// Moves the cycle start to `cycle_start`, leaving the salary untouched.
    async fn reload_cycle(&self, user_id: &str, cycle_start: NaiveDateTime) -> Result<User>;
}

/// Trait defining the contract for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> Result<User>;

    fn get_user(&self, user_id: &str) -> Result<User>;

    fn get_salary(&self, user_id: &str) -> Result<Decimal>;

    /// Updates the salary; allocations follow on the next snapshot.
    async fn update_salary(&self, user_id: &str, salary: Decimal) -> Result<User>;

    /// Starts a new salary cycle and returns its start instant.
    async fn reload_salary_cycle(&self, user_id: &str) -> Result<NaiveDateTime>;
}
