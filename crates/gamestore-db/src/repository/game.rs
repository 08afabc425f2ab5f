//! # Game Repository
//!
//! Database operations for the game catalog.
//!
//! ## Key Operations
//! - Insert a game under an existing genre
//! - Change one column at a time through the [`GameField`] allow-list
//! - Browse by genre, or with genre names joined in
//!
//! ## Single-Field Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How "update game" reaches SQL                        │
//! │                                                                         │
//! │  User types: field = "price", value = "24.50"                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "price".parse::<GameField>()   ── not allow-listed? → rejected        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GameField::Price.parse_value("24.50") → GameUpdate::Price($24.50)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UPDATE games SET price_cents = ?1 WHERE game_id = ?2                  │
//! │                   ▲                  ▲                                  │
//! │                   │                  └── bound parameter (2450)         │
//! │                   └── fixed identifier from GameField::column()         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use futures::{StreamExt, TryStreamExt};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::RowStream;
use gamestore_core::{Game, GameField, GameUpdate, GameWithGenre, NewGame};

/// Repository for game database operations.
///
/// ## Usage
/// ```rust,ignore
/// let games = db.games();
///
/// let game_id = games.create(&new_game).await?;
/// games.update_field(game_id, &GameUpdate::AgeLimit(12)).await?;
///
/// let mut rows = games.list_by_genre(5);
/// while let Some(game) = rows.try_next().await? { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct GameRepository {
    pool: SqlitePool,
}

impl GameRepository {
    /// Creates a new GameRepository.
    pub fn new(pool: SqlitePool) -> Self {
        GameRepository { pool }
    }

    /// Inserts a new game.
    ///
    /// ## Returns
    /// * `Ok(game_id)` - Store-assigned id of the new row
    /// * `Err(DbError::ForeignKeyViolation)` - Genre id does not exist
    pub async fn create(&self, game: &NewGame) -> DbResult<i64> {
        debug!(name = %game.name, genre_id = game.genre_id, "Inserting game");

        let result = sqlx::query(
            r#"
            INSERT INTO games (game_name, genre_id, price_cents, age_limit, storage)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&game.name)
        .bind(game.genre_id)
        .bind(game.price.cents())
        .bind(game.age_limit)
        .bind(&game.storage)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Gets a game by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Game))` - Game found
    /// * `Ok(None)` - Game not found
    pub async fn get_by_id(&self, game_id: i64) -> DbResult<Option<Game>> {
        let game = sqlx::query_as::<_, Game>(
            r#"
            SELECT game_id, game_name, genre_id, price_cents, age_limit, storage
            FROM games
            WHERE game_id = ?1
            "#,
        )
        .bind(game_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(game)
    }

    /// Sets a single column of one game.
    ///
    /// The column identifier comes from [`GameField::column`], never from
    /// user text; the new value is always a bound parameter.
    ///
    /// ## Returns
    /// * `Ok(())` - Exactly the requested column changed
    /// * `Err(DbError::NotFound)` - No game with that id; nothing changed
    /// * `Err(DbError::ForeignKeyViolation)` - New genre id does not exist
    pub async fn update_field(&self, game_id: i64, update: &GameUpdate) -> DbResult<()> {
        let field: GameField = update.field();

        debug!(game_id, field = %field, "Updating game field");

        let sql = format!(
            "UPDATE games SET {} = ?1 WHERE game_id = ?2",
            field.column()
        );

        let query = sqlx::query(&sql);
        let query = match update {
            GameUpdate::GameName(name) => query.bind(name),
            GameUpdate::GenreId(genre_id) => query.bind(*genre_id),
            GameUpdate::Price(price) => query.bind(price.cents()),
            GameUpdate::AgeLimit(age_limit) => query.bind(*age_limit),
            GameUpdate::Storage(storage) => query.bind(storage),
        };

        let result = query.bind(game_id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Game", game_id));
        }

        Ok(())
    }

    /// Streams the games of one genre in store order.
    pub fn list_by_genre(&self, genre_id: i64) -> RowStream<'_, Game> {
        sqlx::query_as::<_, Game>(
            r#"
            SELECT game_id, game_name, genre_id, price_cents, age_limit, storage
            FROM games
            WHERE genre_id = ?1
            "#,
        )
        .bind(genre_id)
        .fetch(&self.pool)
        .map_err(DbError::from)
        .boxed()
    }

    /// Streams every game with its genre's display name.
    ///
    /// Inner join: a game whose genre does not resolve is left out.
    pub fn list_with_genre_names(&self) -> RowStream<'_, GameWithGenre> {
        sqlx::query_as::<_, GameWithGenre>(
            r#"
            SELECT
                g.game_id,
                g.game_name,
                g.price_cents,
                g.age_limit,
                g.storage,
                gr.genre_name
            FROM games g
            INNER JOIN genres gr ON g.genre_id = gr.genre_id
            "#,
        )
        .fetch(&self.pool)
        .map_err(DbError::from)
        .boxed()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};
    use futures::TryStreamExt;
    use gamestore_core::{GameField, GameUpdate, GameWithGenre, Money, NewGame};

    fn chess_quest() -> NewGame {
        NewGame::new("Chess Quest", 5, Money::from_cents(1999), 3, "Digital").unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list_with_genre_names() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let games = db.games();

        let game_id = games.create(&chess_quest()).await.unwrap();

        let rows: Vec<GameWithGenre> = games.list_with_genre_names().try_collect().await.unwrap();
        let matching: Vec<&GameWithGenre> =
            rows.iter().filter(|g| g.game_id == game_id).collect();

        assert_eq!(matching.len(), 1);
        let row = matching[0];
        assert_eq!(row.game_name, "Chess Quest");
        assert_eq!(row.genre_name, "RPG");
        assert_eq!(row.price(), Money::from_cents(1999));
        assert_eq!(row.age_limit, 3);
        assert_eq!(row.storage, "Digital");
    }

    #[tokio::test]
    async fn test_create_with_unknown_genre_fails() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let game = NewGame::new("Ghost", 42, Money::from_cents(500), 12, "Disc").unwrap();

        let err = db.games().create(&game).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_list_by_genre_filters() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let games = db.games();

        games.create(&chess_quest()).await.unwrap();
        let shooter = NewGame::new("Frag Night", 3, Money::from_cents(4999), 18, "Disc").unwrap();
        games.create(&shooter).await.unwrap();

        let rpgs: Vec<_> = games.list_by_genre(5).try_collect().await.unwrap();
        assert_eq!(rpgs.len(), 1);
        assert_eq!(rpgs[0].game_name, "Chess Quest");
        assert_eq!(rpgs[0].genre_id, Some(5));

        let horror: Vec<_> = games.list_by_genre(4).try_collect().await.unwrap();
        assert!(horror.is_empty());
    }

    #[tokio::test]
    async fn test_update_field_changes_only_that_field() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let games = db.games();

        let game_id = games.create(&chess_quest()).await.unwrap();
        let before = games.get_by_id(game_id).await.unwrap().unwrap();

        let update = GameField::Price.parse_value("24.50").unwrap();
        games.update_field(game_id, &update).await.unwrap();

        let after = games.get_by_id(game_id).await.unwrap().unwrap();
        assert_eq!(after.price_cents, 2450);
        assert_eq!(after.game_name, before.game_name);
        assert_eq!(after.genre_id, before.genre_id);
        assert_eq!(after.age_limit, before.age_limit);
        assert_eq!(after.storage, before.storage);
    }

    #[tokio::test]
    async fn test_update_every_field() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let games = db.games();
        let game_id = games.create(&chess_quest()).await.unwrap();

        let updates = [
            GameUpdate::GameName("Chess Quest II".to_string()),
            GameUpdate::GenreId(7),
            GameUpdate::AgeLimit(7),
            GameUpdate::Storage("Cartridge".to_string()),
        ];
        for update in &updates {
            games.update_field(game_id, update).await.unwrap();
        }

        let game = games.get_by_id(game_id).await.unwrap().unwrap();
        assert_eq!(game.game_name, "Chess Quest II");
        assert_eq!(game.genre_id, Some(7));
        assert_eq!(game.age_limit, 7);
        assert_eq!(game.storage, "Cartridge");
        assert_eq!(game.price_cents, 1999);
    }

    #[tokio::test]
    async fn test_update_missing_game_reports_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let games = db.games();
        let game_id = games.create(&chess_quest()).await.unwrap();

        let err = games
            .update_field(999, &GameUpdate::AgeLimit(18))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        let untouched = games.get_by_id(game_id).await.unwrap().unwrap();
        assert_eq!(untouched.age_limit, 3);
    }

    #[tokio::test]
    async fn test_update_to_unknown_genre_fails() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let games = db.games();
        let game_id = games.create(&chess_quest()).await.unwrap();

        let err = games
            .update_field(game_id, &GameUpdate::GenreId(100))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_injected_field_never_reaches_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let games = db.games();
        games.create(&chess_quest()).await.unwrap();

        assert!("game_id; DROP TABLE games".parse::<GameField>().is_err());

        let remaining: Vec<_> = games.list_with_genre_names().try_collect().await.unwrap();
        assert_eq!(remaining.len(), 1);
    }

    #[tokio::test]
    async fn test_game_with_missing_genre_is_hidden_from_join() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let games = db.games();
        games.create(&chess_quest()).await.unwrap();

        sqlx::query(
            "INSERT INTO games (game_name, genre_id, price_cents, age_limit, storage) \
             VALUES ('Untagged', NULL, 100, 0, 'Disc')",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let rows: Vec<_> = games.list_with_genre_names().try_collect().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].game_name, "Chess Quest");
    }
}
