//! # gamestore-core: Pure Domain Logic for the Game Store
//!
//! Domain types and input rules shared by the database layer and the
//! console. Nothing in here touches the database or the terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Game Store Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Menu ──► Prompts ──► Actions ──► Tables                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ gamestore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │   Game    │  │   Money   │  │ Validation│  │  bounds   │  │   │
//! │  │   │ GameField │  │  parsing  │  │   Error   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CONSOLE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                gamestore-db (Database Layer)                    │   │
//! │  │              SQLite schema, seeding, repositories               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Genre, Game, Customer, Order, GameField)
//! - [`money`] - Fixed-point price type stored as integer cents
//! - [`error`] - Domain error types
//! - [`validation`] - Column bounds checked before writes
//!
//! ## Example Usage
//!
//! ```rust
//! use gamestore_core::{GameField, GameUpdate, Money};
//!
//! let price: Money = "19.99".parse().unwrap();
//! assert_eq!(price.cents(), 1999);
//!
//! let field: GameField = "price".parse().unwrap();
//! let update = field.parse_value("24.50").unwrap();
//! assert_eq!(update, GameUpdate::Price(Money::from_cents(2450)));
//!
//! assert!("game_id; DROP TABLE games".parse::<GameField>().is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Genres inserted into an empty store, in insertion order.
///
/// The first entry receives id 1, the fifth ("RPG") id 5, and so on.
pub const SEED_GENRES: [&str; 9] = [
    "Action-adventure",
    "Battle royale game",
    "First-person shooter",
    "Horror",
    "RPG",
    "Sports",
    "Strategy",
    "Survival game",
    "Survival horror",
];

/// Maximum length of game names, customer names and emails.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of the storage medium text.
pub const MAX_STORAGE_LEN: usize = 50;

/// Highest accepted age rating.
pub const MAX_AGE_LIMIT: i32 = 99;
