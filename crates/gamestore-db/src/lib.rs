//! # gamestore-db: Database Layer for the Game Store
//!
//! This crate provides database access for the game store.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Game Store Data Flow                             │
//! │                                                                         │
//! │  Menu action (Place Order)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   gamestore-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (repository/) │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │    │ GenreRepo     │    │ 001_initial_ │  │   │
//! │  │   │ Connection    │◄───│ GameRepo      │    │ schema.sql   │  │   │
//! │  │   │ Management    │    │ CustomerRepo  │    │ + genre seed │  │   │
//! │  │   │               │    │ OrderRepo     │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   <data_dir>/games_db.db                                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection configuration and the `Database` handle
//! - [`migrations`] - Embedded schema and genre seed
//! - [`error`] - Database error types
//! - [`repository`] - Genre, game, customer and order repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gamestore_db::{Database, DbConfig};
//!
//! // Opens the file, creates missing tables, seeds genres
//! let db = Database::new(DbConfig::new("path/to/games_db.db")).await?;
//!
//! let game_id = db.games().create(&new_game).await?;
//! let customer_id = db.customers().create(&new_customer).await?;
//! db.orders().create(customer_id, game_id).await?;
//!
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::game::GameRepository;
pub use repository::genre::GenreRepository;
pub use repository::order::OrderRepository;
pub use repository::RowStream;
