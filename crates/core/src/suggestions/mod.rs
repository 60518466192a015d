//! Suggestions module - money-saving tips derived from a user's budget state.

mod rule_based_provider;
mod suggestions_model;
mod suggestions_service;
mod suggestions_traits;

pub use rule_based_provider::RuleBasedSuggestionProvider;
pub use suggestions_model::{NewSuggestion, Suggestion, SuggestionContext};
pub use suggestions_service::SuggestionService;
pub use suggestions_traits::{
    SuggestionProviderTrait, SuggestionRepositoryTrait, SuggestionServiceTrait,
};
