//! # Repository Module
//!
//! One repository per table.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Menu action                                                           │
//! │       │                                                                 │
//! │       │  db.games().update_field(7, &GameUpdate::Price(..))            │
//! │       ▼                                                                 │
//! │  GameRepository                                                        │
//! │  ├── create(&self, game)                                               │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── update_field(&self, id, update)                                   │
//! │  ├── list_by_genre(&self, genre_id)        → RowStream<Game>           │
//! │  └── list_with_genre_names(&self)          → RowStream<GameWithGenre>  │
//! │       │                                                                 │
//! │       │  Parameterized SQL                                             │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lazy Listings
//! List operations return a [`RowStream`]: rows are decoded one at a time
//! as the caller polls, so a table can be printed while it is read. The
//! stream borrows its repository, so bind the repository first:
//!
//! ```rust,ignore
//! let genres = db.genres();
//! let mut rows = genres.list_all();
//! while let Some(genre) = rows.try_next().await? { /* ... */ }
//! ```
//!
//! ## Available Repositories
//!
//! - [`GenreRepository`](genre::GenreRepository) - Seeded genre list
//! - [`GameRepository`](game::GameRepository) - Game catalog
//! - [`CustomerRepository`](customer::CustomerRepository) - Customer accounts
//! - [`OrderRepository`](order::OrderRepository) - Orders and the joined report

use futures::stream::BoxStream;

use crate::error::DbResult;

pub mod customer;
pub mod game;
pub mod genre;
pub mod order;

/// Lazily fetched query results.
pub type RowStream<'a, T> = BoxStream<'a, DbResult<T>>;
