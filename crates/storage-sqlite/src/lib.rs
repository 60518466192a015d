//! SQLite storage implementation for Budgetwise.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `budgetwise-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The salary store (`users`), the expense ledger (`expenses`) and stored
//!   suggestions (`suggestions`)
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies exist.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod expenses;
pub mod suggestions;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, ping, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use expenses::ExpenseRepository;
pub use suggestions::SuggestionRepository;
pub use users::UserRepository;

// Re-export from budgetwise-core for convenience
pub use budgetwise_core::errors::{DatabaseError, Error, Result};
