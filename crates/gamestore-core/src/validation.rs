//! # Validation Module
//!
//! Input parsing and bounds checks for the game store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt                                               │
//! │  └── Text → integer / price (THIS MODULE: parse_id, parse_age_limit)   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Constructors (NewGame, NewCustomer, GameField)               │
//! │  └── Column bounds the SQLite schema cannot enforce (THIS MODULE)      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  ├── UNIQUE constraints (genre name, customer email)                   │
//! │  └── Foreign key constraints (genre, customer, game)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gamestore_core::validation::{parse_id, validate_name};
//!
//! assert_eq!(parse_id("genre id", " 5 ").unwrap(), 5);
//! assert!(parse_id("genre id", "five").is_err());
//! assert_eq!(validate_name("game name", "  Chess Quest ").unwrap(), "Chess Quest");
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_AGE_LIMIT, MAX_NAME_LEN, MAX_STORAGE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Number Parsers
// =============================================================================

/// Parses a row identity typed at the console.
pub fn parse_id(field: &str, text: &str) -> ValidationResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_format(field, "must be a whole number"))
}

/// Parses and range-checks an age rating.
///
/// ## Example
/// ```rust
/// use gamestore_core::validation::parse_age_limit;
///
/// assert_eq!(parse_age_limit("12").unwrap(), 12);
/// assert!(parse_age_limit("-1").is_err());
/// assert!(parse_age_limit("twelve").is_err());
/// ```
pub fn parse_age_limit(text: &str) -> ValidationResult<i32> {
    let age = text
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::invalid_format("age limit", "must be a whole number"))?;
    validate_age_limit(age)?;
    Ok(age)
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a name column (game name, customer name).
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    bounded_text(field, name, MAX_NAME_LEN)
}

/// Validates a customer email.
///
/// Only presence and length are checked. Uniqueness is the store's job.
pub fn validate_email(email: &str) -> ValidationResult<String> {
    bounded_text("email", email, MAX_NAME_LEN)
}

/// Validates the storage medium text ("Digital", "Disc", ...).
pub fn validate_storage(storage: &str) -> ValidationResult<String> {
    bounded_text("storage", storage, MAX_STORAGE_LEN)
}

fn bounded_text(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a game price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free-to-play titles)
///
/// ## Example
/// ```rust
/// use gamestore_core::money::Money;
/// use gamestore_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1999)).is_ok());
/// assert!(validate_price(Money::from_cents(0)).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::invalid_format("price", "must not be negative"));
    }

    Ok(())
}

/// Validates an age rating: 0 through [`MAX_AGE_LIMIT`].
pub fn validate_age_limit(age: i32) -> ValidationResult<()> {
    if !(0..=MAX_AGE_LIMIT).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age limit".to_string(),
            min: 0,
            max: MAX_AGE_LIMIT as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("game id", "42").unwrap(), 42);
        assert_eq!(parse_id("game id", "  7\n").unwrap(), 7);

        assert!(parse_id("game id", "").is_err());
        assert!(parse_id("game id", "4.2").is_err());
        assert!(parse_id("game id", "abc").is_err());
    }

    #[test]
    fn test_parse_age_limit() {
        assert_eq!(parse_age_limit("0").unwrap(), 0);
        assert_eq!(parse_age_limit("18").unwrap(), 18);

        assert!(matches!(
            parse_age_limit("100"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_age_limit("x"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("game name", "Chess Quest").unwrap(), "Chess Quest");
        assert!(validate_name("game name", "").is_err());
        assert!(validate_name("game name", "   ").is_err());
        assert!(validate_name("game name", &"A".repeat(101)).is_err());
        assert!(validate_name("game name", &"A".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_storage() {
        assert!(validate_storage("Digital").is_ok());
        assert!(matches!(
            validate_storage(&"D".repeat(51)),
            Err(ValidationError::TooLong { max: 50, .. })
        ));
    }

    #[test]
    fn test_validate_email_trims() {
        assert_eq!(validate_email(" ana@example.com ").unwrap(), "ana@example.com");
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }
}
