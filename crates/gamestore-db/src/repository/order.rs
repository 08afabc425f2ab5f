//! # Order Repository
//!
//! Orders and the joined order report.
//!
//! ## Order Report
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    list_with_details()                                  │
//! │                                                                         │
//! │  orders ──┬── customer_id ──► customers (customer_name, email)         │
//! │           └── game_id     ──► games     (game_name)                    │
//! │                                                                         │
//! │  Inner joins: an order whose customer or game is missing is left out.  │
//! │  Rows come back ascending by order_id.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use futures::{StreamExt, TryStreamExt};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::RowStream;
use gamestore_core::OrderDetail;

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Places an order dated with the store's local date.
    ///
    /// The game id is not looked up first; the foreign key rejects unknown
    /// ids.
    ///
    /// ## Returns
    /// * `Ok(order_id)` - Store-assigned id
    /// * `Err(DbError::ForeignKeyViolation)` - Customer or game does not exist
    pub async fn create(&self, customer_id: i64, game_id: i64) -> DbResult<i64> {
        debug!(customer_id, game_id, "Inserting order");

        let result = sqlx::query(
            r#"
            INSERT INTO orders (customer_id, game_id, order_date)
            VALUES (?1, ?2, date('now', 'localtime'))
            "#,
        )
        .bind(customer_id)
        .bind(game_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Streams every order with its customer and game, ascending by id.
    pub fn list_with_details(&self) -> RowStream<'_, OrderDetail> {
        sqlx::query_as::<_, OrderDetail>(
            r#"
            SELECT
                o.order_id,
                c.customer_name,
                c.email,
                g.game_name,
                o.order_date
            FROM orders o
            INNER JOIN customers c ON o.customer_id = c.customer_id
            INNER JOIN games g ON o.game_id = g.game_id
            ORDER BY o.order_id ASC
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
    use chrono::Local;
    use futures::TryStreamExt;
    use gamestore_core::{Money, NewCustomer, NewGame, OrderDetail};

    #[tokio::test]
    async fn test_end_to_end_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let game = NewGame::new("Chess Quest", 5, Money::from_cents(1999), 3, "Digital").unwrap();
        let game_id = db.games().create(&game).await.unwrap();

        let customer = NewCustomer::new("Ana", "ana@example.com").unwrap();
        db.customers().create(&customer).await.unwrap();

        let customer_id = db.customers().find_id_by_name("Ana").await.unwrap().unwrap();
        db.orders().create(customer_id, game_id).await.unwrap();

        let orders = db.orders();
        let rows: Vec<OrderDetail> = orders.list_with_details().try_collect().await.unwrap();

        assert_eq!(rows.len(), 1);
        let order = &rows[0];
        assert_eq!(order.order_id, 1);
        assert_eq!(order.customer_name, "Ana");
        assert_eq!(order.email, "ana@example.com");
        assert_eq!(order.game_name, "Chess Quest");

        // Dated by the store; a run across midnight may see either day
        let today = Local::now().date_naive();
        assert!((today - order.order_date).num_days().abs() <= 1);
    }

    #[tokio::test]
    async fn test_orphaned_orders_are_hidden_from_report() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let game = NewGame::new("Chess Quest", 5, Money::from_cents(1999), 3, "Digital").unwrap();
        let game_id = db.games().create(&game).await.unwrap();
        let ana = db
            .customers()
            .create(&NewCustomer::new("Ana", "ana@example.com").unwrap())
            .await
            .unwrap();

        sqlx::query(
            "INSERT INTO orders (customer_id, game_id, order_date) \
             VALUES (NULL, ?1, '2024-01-01'), (?2, NULL, '2024-01-02')",
        )
        .bind(game_id)
        .bind(ana)
        .execute(db.pool())
        .await
        .unwrap();

        let orders = db.orders();
        let kept = orders.create(ana, game_id).await.unwrap();

        let rows: Vec<OrderDetail> = orders.list_with_details().try_collect().await.unwrap();
        let ids: Vec<i64> = rows.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![kept]);
        assert_eq!(rows[0].customer_name, "Ana");
    }

    #[tokio::test]
    async fn test_orders_ascending_by_id() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let first = NewGame::new("Chess Quest", 5, Money::from_cents(1999), 3, "Digital").unwrap();
        let second = NewGame::new("Dune Run", 8, Money::from_cents(2999), 12, "Disc").unwrap();
        let first_id = db.games().create(&first).await.unwrap();
        let second_id = db.games().create(&second).await.unwrap();

        let ana = db
            .customers()
            .create(&NewCustomer::new("Ana", "ana@example.com").unwrap())
            .await
            .unwrap();
        let bo = db
            .customers()
            .create(&NewCustomer::new("Bo", "bo@example.com").unwrap())
            .await
            .unwrap();

        let orders = db.orders();
        orders.create(bo, second_id).await.unwrap();
        orders.create(ana, first_id).await.unwrap();
        orders.create(ana, second_id).await.unwrap();

        let rows: Vec<OrderDetail> = orders.list_with_details().try_collect().await.unwrap();
        let ids: Vec<i64> = rows.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert_eq!(rows[0].customer_name, "Bo");
        assert_eq!(rows[0].game_name, "Dune Run");
        assert_eq!(rows[1].email, "ana@example.com");
        assert_eq!(rows[1].game_name, "Chess Quest");
    }

    #[tokio::test]
    async fn test_order_for_unknown_game_fails() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let ana = db
            .customers()
            .create(&NewCustomer::new("Ana", "ana@example.com").unwrap())
            .await
            .unwrap();

        let err = db.orders().create(ana, 77).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        let orders = db.orders();
        let rows: Vec<OrderDetail> = orders.list_with_details().try_collect().await.unwrap();
        assert!(rows.is_empty());
    }
}
