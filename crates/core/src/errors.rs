//! Core error types for the budget engine.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::categories::BudgetGroup;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the budget engine.
///
/// Validation and budget errors are returned synchronously to the caller.
/// Collaborator failures surface as `UpstreamUnavailable` (or a `Database`
/// error coming out of the storage layer) and are never retried here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Budget exceeded for {}: only {remaining} remaining", .group.display_name())]
    BudgetExceeded {
        group: BudgetGroup,
        remaining: Decimal,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream collaborator unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Arithmetic overflow while computing {0}")]
    Arithmetic(String),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when the error means the requested entity does not exist,
    /// whether raised by the engine or by the storage layer.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_) | Error::Database(DatabaseError::NotFound(_))
        )
    }

    /// True when the write collided with existing data, e.g. a duplicate email.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Error::Database(DatabaseError::UniqueViolation(_))
                | Error::Database(DatabaseError::ForeignKeyViolation(_))
        )
    }

    /// True when a persistence or delivery collaborator failed.
    pub fn is_upstream(&self) -> bool {
        match self {
            Error::UpstreamUnavailable(_) => true,
            Error::Database(_) => !self.is_not_found() && !self.is_conflict(),
            _ => false,
        }
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Amount '{0}' is not a number")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Salary cannot be negative, got {0}")]
    NegativeSalary(Decimal),

    #[error("Amount {value} exceeds the maximum of {max}")]
    AmountTooLarge { value: Decimal, max: Decimal },

    #[error("Amount {value} has more than {max_places} decimal places")]
    TooManyDecimalPlaces { value: Decimal, max_places: u32 },

    #[error("Amount {0} would push the ledger totals out of range")]
    TotalOutOfRange(Decimal),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown interval '{0}', expected weekly, monthly or yearly")]
    UnknownInterval(String),

    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: String, to: String },

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_budget_exceeded_message_names_group_and_remaining() {
        let err = Error::BudgetExceeded {
            group: BudgetGroup::Basic,
            remaining: dec!(1000),
        };
        assert_eq!(
            err.to_string(),
            "Budget exceeded for Basic Needs: only 1000 remaining"
        );
    }

    #[test]
    fn test_not_found_covers_storage_not_found() {
        assert!(Error::NotFound("user-1".to_string()).is_not_found());
        assert!(Error::Database(DatabaseError::NotFound("x".to_string())).is_not_found());
        assert!(!Error::Database(DatabaseError::QueryFailed("x".to_string())).is_not_found());
    }

    #[test]
    fn test_upstream_classification() {
        assert!(Error::UpstreamUnavailable("smtp".to_string()).is_upstream());
        assert!(Error::Database(DatabaseError::ConnectionFailed("x".to_string())).is_upstream());
        assert!(!Error::Database(DatabaseError::NotFound("x".to_string())).is_upstream());
        assert!(!Error::Database(DatabaseError::UniqueViolation("x".to_string())).is_upstream());
        assert!(Error::Database(DatabaseError::UniqueViolation("x".to_string())).is_conflict());
        assert!(!Error::Validation(ValidationError::MissingField("amount".to_string()))
            .is_upstream());
        assert!(!Error::Arithmetic("total spent".to_string()).is_upstream());
    }
}
