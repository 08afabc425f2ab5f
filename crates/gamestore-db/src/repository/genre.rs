//! # Genre Repository
//!
//! Read access to the seeded genre list. Genres are written once by
//! [`seed_genres`](crate::migrations::seed_genres) and never changed.

use futures::{StreamExt, TryStreamExt};
use sqlx::SqlitePool;

use crate::error::{DbError, DbResult};
use crate::repository::RowStream;
use gamestore_core::Genre;

/// Repository for genre database operations.
#[derive(Debug, Clone)]
pub struct GenreRepository {
    pool: SqlitePool,
}

impl GenreRepository {
    /// Creates a new GenreRepository.
    pub fn new(pool: SqlitePool) -> Self {
        GenreRepository { pool }
    }

    /// Streams every genre in the store's natural order.
    ///
    /// Shown to the user before any prompt that asks for a genre id.
    pub fn list_all(&self) -> RowStream<'_, Genre> {
        sqlx::query_as::<_, Genre>("SELECT genre_id, genre_name FROM genres")
            .fetch(&self.pool)
            .map_err(DbError::from)
            .boxed()
    }

    /// Counts genres (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
