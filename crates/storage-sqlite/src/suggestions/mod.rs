mod model;
mod repository;

pub use model::SuggestionDB;
pub use repository::SuggestionRepository;
