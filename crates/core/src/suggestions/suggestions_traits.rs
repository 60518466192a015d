use async_trait::async_trait;

use super::suggestions_model::{NewSuggestion, Suggestion, SuggestionContext};
use crate::errors::Result;

/// Produces one tip for a user's cycle. Implementations may call out to a
/// remote model; failures surface as `UpstreamUnavailable`.
#[async_trait]
pub trait SuggestionProviderTrait: Send + Sync {
    async fn suggest(&self, context: SuggestionContext<'_>) -> Result<String>;
}

#[async_trait]
pub trait SuggestionRepositoryTrait: Send + Sync {
    async fn insert(&self, suggestion: NewSuggestion) -> Result<Suggestion>;

    /// Newest first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Suggestion>>;
}

#[async_trait]
pub trait SuggestionServiceTrait: Send + Sync {
    /// Generates a tip from the active cycle and stores it.
    async fn generate(&self, user_id: &str) -> Result<Suggestion>;

    fn list(&self, user_id: &str) -> Result<Vec<Suggestion>>;
}
