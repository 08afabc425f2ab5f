//! # Customer Repository
//!
//! Database operations for customer accounts.
//!
//! Customer names are not unique; emails are. Name lookups therefore come
//! in two forms: [`find_id_by_name`](CustomerRepository::find_id_by_name)
//! picks the lowest id, [`find_ids_by_name`](CustomerRepository::find_ids_by_name)
//! returns every match so a caller can ask which one was meant.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use gamestore_core::{Customer, NewCustomer};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Registers a customer.
    ///
    /// ## Returns
    /// * `Ok(customer_id)` - Store-assigned id
    /// * `Err(DbError::UniqueViolation)` - Email already registered
    pub async fn create(&self, customer: &NewCustomer) -> DbResult<i64> {
        debug!(name = %customer.name, "Inserting customer");

        let result = sqlx::query("INSERT INTO customers (customer_name, email) VALUES (?1, ?2)")
            .bind(&customer.name)
            .bind(&customer.email)
            .execute(&self.pool)
            .await
            .map_err(|e| match DbError::from(e) {
                DbError::UniqueViolation { .. } => DbError::duplicate("email", &customer.email),
                other => other,
            })?;

        Ok(result.last_insert_rowid())
    }

    /// Id of the first customer (lowest id) whose name matches exactly.
    ///
    /// Matching is case-sensitive.
    pub async fn find_id_by_name(&self, name: &str) -> DbResult<Option<i64>> {
        let id: Option<i64> = sqlx::query_scalar(
            "SELECT customer_id FROM customers WHERE customer_name = ?1 ORDER BY customer_id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    /// Ids of every customer whose name matches exactly, ascending.
    pub async fn find_ids_by_name(&self, name: &str) -> DbResult<Vec<i64>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT customer_id FROM customers WHERE customer_name = ?1 ORDER BY customer_id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        debug!(name = %name, matches = ids.len(), "Customer name lookup");
        Ok(ids)
    }

    /// Gets a customer by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - Customer not found
    pub async fn get_by_id(&self, customer_id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT customer_id, customer_name, email FROM customers WHERE customer_id = ?1",
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};
    use gamestore_core::NewCustomer;

    fn customer(name: &str, email: &str) -> NewCustomer {
        NewCustomer::new(name, email).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let customers = db.customers();

        let id = customers
            .create(&customer("Ana", "ana@example.com"))
            .await
            .unwrap();

        let stored = customers.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.customer_name, "Ana");
        assert_eq!(stored.email, "ana@example.com");

        assert!(customers.get_by_id(id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_names_the_email() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let customers = db.customers();

        customers
            .create(&customer("Ana", "ana@example.com"))
            .await
            .unwrap();
        let err = customers
            .create(&customer("Another Ana", "ana@example.com"))
            .await
            .unwrap_err();

        match err {
            DbError::UniqueViolation { field, value } => {
                assert_eq!(field, "email");
                assert_eq!(value, "ana@example.com");
            }
            other => panic!("expected UniqueViolation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_find_id_by_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let customers = db.customers();

        assert_eq!(customers.find_id_by_name("Ana").await.unwrap(), None);

        let first = customers
            .create(&customer("Ana", "ana@example.com"))
            .await
            .unwrap();
        assert_eq!(customers.find_id_by_name("Ana").await.unwrap(), Some(first));

        let second = customers
            .create(&customer("Ana", "ana.two@example.com"))
            .await
            .unwrap();
        assert_eq!(customers.find_id_by_name("Ana").await.unwrap(), Some(first));
        assert_eq!(
            customers.find_ids_by_name("Ana").await.unwrap(),
            vec![first, second]
        );
    }

    #[tokio::test]
    async fn test_name_lookup_is_case_sensitive() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let customers = db.customers();

        customers
            .create(&customer("Ana", "ana@example.com"))
            .await
            .unwrap();

        assert_eq!(customers.find_id_by_name("ana").await.unwrap(), None);
        assert!(customers.find_ids_by_name("ANA").await.unwrap().is_empty());
    }
}
