//! Budgetwise Core - 50/30/20 budget domain, services, and traits.
//!
//! This crate holds the allocation, admission and analytics logic. It is
//! database-agnostic and defines the repository traits implemented by the
//! `storage-sqlite` crate.

pub mod allocation;
pub mod analytics;
pub mod budget;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod events;
pub mod expenses;
pub mod notifications;
pub mod suggestions;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
