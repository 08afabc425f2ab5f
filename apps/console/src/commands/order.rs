//! Order actions.
//!
//! ## Customer Lookup
//! ```text
//! name ──► find_ids_by_name
//!            ├── []        → "Customer not found. Please add the customer first."
//!            ├── [id]      → id
//!            └── [id, ..]  → list the ids, ask which one
//! ```

use futures::TryStreamExt;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

use super::show_games_with_genres;
use crate::console::Console;
use crate::error::ConsoleError;
use crate::render;
use gamestore_core::validation::validate_name;
use gamestore_db::Database;

/// Menu 5: Place Order.
pub async fn place_order<R, W>(
    console: &mut Console<R, W>,
    db: &Database,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.println("\nPlacing an Order:").await?;

    let raw = console.prompt("Enter Customer Name: ").await?;
    let name = validate_name("customer name", &raw)?;
    let customer_id = resolve_customer(console, db, &name).await?;

    show_games_with_genres(console, db).await?;

    let game_id = console.prompt_id("Enter Game ID: ", "game id").await?;
    let order_id = db.orders().create(customer_id, game_id).await?;

    info!(order_id, customer_id, game_id, "Order placed");
    console.println("Order placed successfully!").await
}

/// Turns a typed name into one customer id, asking when names collide.
async fn resolve_customer<R, W>(
    console: &mut Console<R, W>,
    db: &Database,
    name: &str,
) -> Result<i64, ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let ids = db.customers().find_ids_by_name(name).await?;

    match ids.as_slice() {
        [] => Err(ConsoleError::CustomerNotFound {
            name: name.to_string(),
        }),
        [id] => Ok(*id),
        _ => {
            debug!(name = %name, matches = ids.len(), "Ambiguous customer name");

            let listed: Vec<String> = ids.iter().map(i64::to_string).collect();
            console
                .println(&format!(
                    "Several customers are named {}: IDs {}",
                    name,
                    listed.join(", ")
                ))
                .await?;

            let id = console
                .prompt_id("Enter Customer ID: ", "customer id")
                .await?;
            if ids.contains(&id) {
                Ok(id)
            } else {
                Err(ConsoleError::CustomerMismatch {
                    id,
                    name: name.to_string(),
                })
            }
        }
    }
}

/// Menu 6: View Ordered Games.
pub async fn view_orders<R, W>(
    console: &mut Console<R, W>,
    db: &Database,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.println(&render::orders_header()).await?;

    let orders = db.orders();
    let mut rows = orders.list_with_details();
    while let Some(order) = rows.try_next().await? {
        console.println(&render::order_row(&order)).await?;
    }
    Ok(())
}
