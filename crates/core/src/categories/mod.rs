//! Category registry module - budget groups and the category classification table.

mod categories_model;
mod categories_registry;

pub use categories_model::{BudgetGroup, CategoryEntry, TRACKED_GROUPS};
pub use categories_registry::{classify, CategoryRegistry};
