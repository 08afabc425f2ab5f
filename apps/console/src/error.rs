//! # Console Error Type
//!
//! Unified error type for menu actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in a Menu Action                          │
//! │                                                                         │
//! │  Action (e.g. Update Game Details)                                     │
//! │  Result<(), ConsoleError>                                              │
//! │         │                                                               │
//! │         ├── Bad number / field name ─── ValidationError ──┐            │
//! │         │                                                  │            │
//! │         ├── Zero rows / no customer ─── NotFound ──────────┤            │
//! │         │                                                  ▼            │
//! │         ├── Store failure ───────────── DbError ──── ConsoleError       │
//! │         │                                                  │            │
//! │         ▼                                                  ▼            │
//! │  Success message              Shell logs it, prints user_message(),    │
//! │                               shows the menu again                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Internal query details never reach the console; they are logged and
//! replaced by a generic message.

use gamestore_core::ValidationError;
use gamestore_db::DbError;
use thiserror::Error;

/// Error produced by a single menu action.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input could not be parsed or is out of bounds.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store failure.
    #[error(transparent)]
    Db(#[from] DbError),

    /// No customer is registered under the name given for an order.
    #[error("Customer not found: {name}")]
    CustomerNotFound { name: String },

    /// A chosen customer id is not one of the customers sharing the name.
    #[error("Customer {id} is not named {name}")]
    CustomerMismatch { id: i64, name: String },

    /// Reading the console or writing to it failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}

/// Error categories, for logging and for deciding whether the shell can
/// keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input validation failed
    Validation,

    /// Referenced record does not exist
    NotFound,

    /// Uniqueness or reference rule rejected the write
    Conflict,

    /// Store operation failed
    Database,

    /// Console stream failed
    Io,

    /// End of input
    InputClosed,
}

impl ConsoleError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConsoleError::Validation(_) => ErrorKind::Validation,
            ConsoleError::CustomerNotFound { .. } | ConsoleError::CustomerMismatch { .. } => {
                ErrorKind::NotFound
            }
            ConsoleError::Db(DbError::NotFound { .. }) => ErrorKind::NotFound,
            ConsoleError::Db(err) if err.is_constraint_violation() => ErrorKind::Conflict,
            ConsoleError::Db(_) => ErrorKind::Database,
            ConsoleError::Io(_) => ErrorKind::Io,
            ConsoleError::InputClosed => ErrorKind::InputClosed,
        }
    }

    /// True when the shell cannot read further input.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind(), ErrorKind::Io | ErrorKind::InputClosed)
    }

    /// Message printed to the console.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Validation(err) => format!("Invalid input: {}", err),
            ConsoleError::CustomerNotFound { .. } => {
                "Customer not found. Please add the customer first.".to_string()
            }
            ConsoleError::CustomerMismatch { id, name } => {
                format!("Customer ID {} does not belong to a customer named {}.", id, name)
            }
            ConsoleError::Db(err) => db_message(err),
            ConsoleError::Io(_) => "Console input/output failed.".to_string(),
            ConsoleError::InputClosed => "Input closed.".to_string(),
        }
    }
}

fn db_message(err: &DbError) -> String {
    match err {
        DbError::NotFound { entity, id } => format!("{} not found with ID: {}", entity, id),
        DbError::UniqueViolation { field, value } => {
            format!("A customer with {} '{}' already exists.", field, value)
        }
        DbError::ForeignKeyViolation { message } => {
            tracing::error!("Foreign key violation: {}", message);
            "Invalid reference: the referenced genre, customer or game does not exist.".to_string()
        }
        DbError::CheckViolation { message } => {
            tracing::error!("Check constraint violation: {}", message);
            "Invalid value: rejected by the store.".to_string()
        }
        DbError::ConnectionFailed(e) => {
            tracing::error!("Database connection failed: {}", e);
            "Database unavailable.".to_string()
        }
        DbError::PoolExhausted => "Database busy, please try again.".to_string(),
        DbError::SchemaInit(e) | DbError::QueryFailed(e) | DbError::Internal(e) => {
            // Log the actual error but show a generic message
            tracing::error!("Database operation failed: {}", e);
            "Database operation failed.".to_string()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let err: ConsoleError = DbError::not_found("Game", 9).into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.user_message(), "Game not found with ID: 9");

        let err: ConsoleError = DbError::duplicate("email", "ana@example.com").into();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(err.user_message().contains("ana@example.com"));

        let err: ConsoleError = DbError::QueryFailed("near \"x\": syntax error".into()).into();
        assert_eq!(err.kind(), ErrorKind::Database);
        assert_eq!(err.user_message(), "Database operation failed.");
    }

    #[test]
    fn test_validation_message() {
        let err: ConsoleError = ValidationError::Required {
            field: "game name".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.user_message().starts_with("Invalid input: "));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_customer_not_found_message() {
        let err = ConsoleError::CustomerNotFound {
            name: "Zed".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Customer not found. Please add the customer first."
        );
    }

    #[test]
    fn test_fatal_errors() {
        assert!(ConsoleError::InputClosed.is_fatal());
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        assert!(ConsoleError::from(io).is_fatal());
    }
}
