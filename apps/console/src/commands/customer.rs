//! Customer actions.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use crate::console::Console;
use crate::error::ConsoleError;
use crate::render;
use gamestore_core::NewCustomer;
use gamestore_db::Database;

/// Menu 4: Add New Customer. Echoes the stored row after the insert.
pub async fn add_customer<R, W>(
    console: &mut Console<R, W>,
    db: &Database,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.println("\nAdding a New Customer:").await?;

    let name = console.prompt("Enter Customer Name: ").await?;
    let email = console.prompt("Enter Email: ").await?;
    let customer = NewCustomer::new(&name, &email)?;

    let customers = db.customers();
    let customer_id = customers.create(&customer).await?;
    info!(customer_id, "Customer added");

    if let Some(stored) = customers.get_by_id(customer_id).await? {
        console.println(&render::customer_details(&stored)).await?;
    }

    console.println("Customer added successfully!").await
}
