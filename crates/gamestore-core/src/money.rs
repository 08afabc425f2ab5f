//! # Money Module
//!
//! Provides the `Money` type for game prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Reading "19.99" into an f64 and writing it back:                       │
//! │    19.99 → 19.989999999999998  ❌ WRONG!                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "19.99" → 1999 cents → stored as INTEGER → shown as $19.99          │
//! │    Fixed-point with exactly two decimal places, end to end              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gamestore_core::money::Money;
//!
//! // Parse console input
//! let price: Money = "19.99".parse().unwrap();
//! assert_eq!(price.cents(), 1999);
//!
//! // Or build from cents
//! assert_eq!(Money::from_cents(1999), price);
//! assert_eq!(price.to_string(), "$19.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: parsing keeps the sign so validation can name the
///   problem instead of failing as a format error
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use gamestore_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use gamestore_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the price the way the tables print it: `$19.99`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let text = format!("{}${}.{:02}", sign, self.dollars().abs(), self.cents_part());
        // Route through `pad` so table column widths apply.
        f.pad(&text)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Parses a decimal price with at most two fractional digits.
///
/// ## Accepted Input
/// ```text
/// "19.99"  → 1999      "$19.99" → 1999
/// "19.9"   → 1990      "19"     → 1900
/// "-5.50"  → -550      (rejected later by validate_price)
///
/// "19.999" ✗  too many decimals
/// "19."    ✗  dangling point
/// "abc"    ✗  not a number
/// ```
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::invalid_format("price", reason);

        let text = s.trim();
        let text = text.strip_prefix('$').unwrap_or(text);
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (major, minor) = match digits.split_once('.') {
            Some((_, "")) => return Err(invalid("expected digits after the decimal point")),
            Some(parts) => parts,
            None => (digits, ""),
        };

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a number like 19.99"));
        }
        if minor.len() > 2 || !minor.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("at most two decimal places are allowed"));
        }

        let major: i64 = major
            .parse()
            .map_err(|_| invalid("amount is too large"))?;
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid("bad cents"))? * 10,
            _ => minor.parse::<i64>().map_err(|_| invalid("bad cents"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:<8}|", Money::from_cents(1999)), "$19.99  |");
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!("19.99".parse::<Money>().unwrap().cents(), 1999);
        assert_eq!(" $19.99 ".parse::<Money>().unwrap().cents(), 1999);
        assert_eq!("19.9".parse::<Money>().unwrap().cents(), 1990);
        assert_eq!("19".parse::<Money>().unwrap().cents(), 1900);
        assert_eq!("0.05".parse::<Money>().unwrap().cents(), 5);
        assert_eq!("-5.50".parse::<Money>().unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("19.999".parse::<Money>().is_err());
        assert!("19.".parse::<Money>().is_err());
        assert!(".99".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("1,99".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_error_names_price() {
        let err = "nineteen".parse::<Money>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "price"));
    }
}
