use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::suggestions_model::{NewSuggestion, Suggestion, SuggestionContext};
use super::suggestions_traits::{
    SuggestionProviderTrait, SuggestionRepositoryTrait, SuggestionServiceTrait,
};
use crate::budget::BudgetEngine;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::users::UserRepositoryTrait;

pub struct SuggestionService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    suggestion_repository: Arc<dyn SuggestionRepositoryTrait>,
    provider: Arc<dyn SuggestionProviderTrait>,
    engine: BudgetEngine,
}

impl SuggestionService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        suggestion_repository: Arc<dyn SuggestionRepositoryTrait>,
        provider: Arc<dyn SuggestionProviderTrait>,
    ) -> Self {
        Self {
            user_repository,
            expense_repository,
            suggestion_repository,
            provider,
            engine: BudgetEngine::default(),
        }
    }
}

#[async_trait]
impl SuggestionServiceTrait for SuggestionService {
    async fn generate(&self, user_id: &str) -> Result<Suggestion> {
        let user = self.user_repository.get_by_id(user_id)?;
        let records = self
            .expense_repository
            .query_recorded_since(&user.id, user.cycle_start)?;
        let snapshot = self.engine.compute_snapshot(&user, &records)?;

        let text = self
            .provider
            .suggest(SuggestionContext {
                snapshot: &snapshot,
                records_in_cycle: &records,
            })
            .await?;

        let stored = self
            .suggestion_repository
            .insert(NewSuggestion {
                user_id: user.id,
                suggestion: text,
            })
            .await?;
        info!("Generated suggestion {} for user {}", stored.id, stored.user_id);
        Ok(stored)
    }

    fn list(&self, user_id: &str) -> Result<Vec<Suggestion>> {
        self.user_repository.get_by_id(user_id)?;
        self.suggestion_repository.list_for_user(user_id)
    }
}
