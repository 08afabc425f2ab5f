//! # Schema Initialization
//!
//! Embedded SQL schema plus the genre seed.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Schema Initialization                              │
//! │                                                                         │
//! │  Database::new()                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  run_migrations() ── 001_initial_schema.sql                            │
//! │       │              (CREATE TABLE IF NOT EXISTS ×4)                   │
//! │       ▼                                                                 │
//! │  seed_genres()                                                         │
//! │       │                                                                 │
//! │       ├── genres has rows? → leave them alone                          │
//! │       │                                                                 │
//! │       └── genres empty?    → insert the 9 SEED_GENRES in order         │
//! │                              (one transaction)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Any failure → DbError::SchemaInit → process stops                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/sqlite/` with the next sequence number
//! 2. Name format: `NNN_description.sql`
//! 3. Write idempotent SQL (use `IF NOT EXISTS` where possible)
//! 4. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use gamestore_core::SEED_GENRES;

/// Embedded migrations from the `migrations/sqlite` directory.
///
/// The `sqlx::migrate!()` macro embeds all SQL files from the directory
/// into the binary at compile time. No runtime file access needed.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Creates the schema and seeds genres. Safe to run on every startup.
///
/// ## Errors
/// Every failure is reported as [`DbError::SchemaInit`].
pub async fn initialize(pool: &SqlitePool) -> DbResult<()> {
    run_migrations(pool).await?;

    let inserted = seed_genres(pool)
        .await
        .map_err(|e| DbError::SchemaInit(e.to_string()))?;

    info!(inserted, "Schema ready");
    Ok(())
}

/// Runs all pending database migrations.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Transactional: each migration runs in a transaction
/// - Ordered: migrations run in filename order (001, 002, ...)
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

/// Inserts [`SEED_GENRES`] if the genres table is empty.
///
/// ## Returns
/// Number of genres inserted: 9 on a fresh store, 0 otherwise.
pub async fn seed_genres(pool: &SqlitePool) -> DbResult<usize> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        debug!(existing, "Genres already present, skipping seed");
        return Ok(0);
    }

    for name in SEED_GENRES {
        sqlx::query("INSERT INTO genres (genre_name) VALUES (?1)")
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(count = SEED_GENRES.len(), "Seeded genres");
    Ok(SEED_GENRES.len())
}

// =============================================================================
// Unit Tests
// =============================================================================
