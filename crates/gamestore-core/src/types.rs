//! # Domain Types
//!
//! Core domain types used throughout the game store.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Genre       │   │      Game       │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  genre_id       │◄──│  genre_id (FK)  │   │  customer_id    │       │
//! │  │  genre_name (U) │   │  price_cents    │   │  email (U)      │       │
//! │  └─────────────────┘   │  age_limit      │   └────────▲────────┘       │
//! │                        │  storage        │            │                │
//! │                        └────────▲────────┘            │                │
//! │                                 │      ┌──────────────┴──┐             │
//! │                                 └──────│     Order       │             │
//! │                                        │  order_date     │             │
//! │                                        └─────────────────┘             │
//! │                                                                         │
//! │  Write inputs: NewGame, NewCustomer, GameUpdate (via GameField)        │
//! │  Joined reads: GameWithGenre, OrderDetail                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every row has an integer identity assigned by the store on insert.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    parse_age_limit, parse_id, validate_age_limit, validate_email, validate_name, validate_price,
    validate_storage, ValidationResult,
};

// =============================================================================
// Genre
// =============================================================================

/// A named category assigned to games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Genre {
    pub genre_id: i64,
    pub genre_name: String,
}

// =============================================================================
// Game
// =============================================================================

/// A purchasable catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Game {
    pub game_id: i64,

    pub game_name: String,

    /// Genre reference. The column is nullable; the store's foreign key
    /// rejects ids that do not exist.
    pub genre_id: Option<i64>,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Minimum age rating.
    pub age_limit: i32,

    /// Storage medium, free text.
    pub storage: String,
}

impl Game {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// A game joined with its genre's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct GameWithGenre {
    pub game_id: i64,
    pub game_name: String,
    pub price_cents: i64,
    pub age_limit: i32,
    pub storage: String,
    pub genre_name: String,
}

impl GameWithGenre {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Validated input for inserting a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub name: String,
    pub genre_id: i64,
    pub price: Money,
    pub age_limit: i32,
    pub storage: String,
}

impl NewGame {
    /// Builds a game insert, trimming text and checking column bounds.
    ///
    /// The genre id is not checked here: only the store knows which
    /// genres exist.
    pub fn new(
        name: &str,
        genre_id: i64,
        price: Money,
        age_limit: i32,
        storage: &str,
    ) -> ValidationResult<Self> {
        validate_price(price)?;
        validate_age_limit(age_limit)?;

        Ok(NewGame {
            name: validate_name("game name", name)?,
            genre_id,
            price,
            age_limit,
            storage: validate_storage(storage)?,
        })
    }
}

// =============================================================================
// Updatable Game Fields
// =============================================================================

/// The game columns a user may change through "update game".
///
/// ## Why an Enum?
/// The field name arrives as console text. Parsing it into this enum is
/// the only way to reach an UPDATE statement, and each variant maps to a
/// fixed column identifier, so user text never becomes SQL.
///
/// ```text
/// "price"                      → GameField::Price → price_cents
/// "game_id; DROP TABLE games"  → ValidationError::NotAllowed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameField {
    GameName,
    GenreId,
    Price,
    AgeLimit,
    Storage,
}

impl GameField {
    /// Every updatable field, in prompt order.
    pub const ALL: [GameField; 5] = [
        GameField::GameName,
        GameField::GenreId,
        GameField::Price,
        GameField::AgeLimit,
        GameField::Storage,
    ];

    /// The name users type to select this field.
    pub const fn name(&self) -> &'static str {
        match self {
            GameField::GameName => "game_name",
            GameField::GenreId => "genre_id",
            GameField::Price => "price",
            GameField::AgeLimit => "age_limit",
            GameField::Storage => "storage",
        }
    }

    /// The `games` column this field writes.
    pub const fn column(&self) -> &'static str {
        match self {
            GameField::GameName => "game_name",
            GameField::GenreId => "genre_id",
            GameField::Price => "price_cents",
            GameField::AgeLimit => "age_limit",
            GameField::Storage => "storage",
        }
    }

    /// Parses console text into a typed value for this field.
    ///
    /// ## Example
    /// ```rust
    /// use gamestore_core::{GameField, GameUpdate};
    ///
    /// let update = GameField::AgeLimit.parse_value("16").unwrap();
    /// assert_eq!(update, GameUpdate::AgeLimit(16));
    /// assert!(GameField::AgeLimit.parse_value("sixteen").is_err());
    /// ```
    pub fn parse_value(&self, raw: &str) -> ValidationResult<GameUpdate> {
        let update = match self {
            GameField::GameName => GameUpdate::GameName(validate_name("game name", raw)?),
            GameField::GenreId => GameUpdate::GenreId(parse_id("genre id", raw)?),
            GameField::Price => {
                let price: Money = raw.parse()?;
                validate_price(price)?;
                GameUpdate::Price(price)
            }
            GameField::AgeLimit => GameUpdate::AgeLimit(parse_age_limit(raw)?),
            GameField::Storage => GameUpdate::Storage(validate_storage(raw)?),
        };
        Ok(update)
    }
}

impl fmt::Display for GameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        GameField::ALL
            .into_iter()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "field".to_string(),
                allowed: GameField::ALL.iter().map(|f| f.name().to_string()).collect(),
            })
    }
}

/// A single typed column change for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameUpdate {
    GameName(String),
    GenreId(i64),
    Price(Money),
    AgeLimit(i32),
    Storage(String),
}

impl GameUpdate {
    /// The field this update writes.
    pub const fn field(&self) -> GameField {
        match self {
            GameUpdate::GameName(_) => GameField::GameName,
            GameUpdate::GenreId(_) => GameField::GenreId,
            GameUpdate::Price(_) => GameField::Price,
            GameUpdate::AgeLimit(_) => GameField::AgeLimit,
            GameUpdate::Storage(_) => GameField::Storage,
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A named, email-identified account able to place orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub customer_id: i64,
    /// Not unique: two customers may share a name.
    pub customer_name: String,
    /// Unique across customers.
    pub email: String,
}

/// Validated input for registering a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

impl NewCustomer {
    pub fn new(name: &str, email: &str) -> ValidationResult<Self> {
        Ok(NewCustomer {
            name: validate_name("customer name", name)?,
            email: validate_email(email)?,
        })
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order joined with the customer and game it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderDetail {
    pub order_id: i64,
    pub customer_name: String,
    pub email: String,
    pub game_name: String,
    /// Store-local date the order row was inserted.
    pub order_date: NaiveDate,
}

// =============================================================================
// Unit Tests
// =============================================================================
