//! # Menu Shell
//!
//! The interactive loop behind the `gamestore` binary.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Loop                                       │
//! │                                                                         │
//! │  print menu ──► read choice ──┬── "1".."6" ──► action ──┐              │
//! │       ▲                       │                          │              │
//! │       │                       ├── "7" / end of input ──► "Exiting..."  │
//! │       │                       │                                         │
//! │       │                       └── anything else ──► "Invalid choice"    │
//! │       │                                                  │              │
//! │       │          Ok  ──► success message was printed     │              │
//! │       └───────── Err ──► log + user_message()  ◄─────────┘              │
//! │                                                                         │
//! │  Only console I/O failure leaves the loop with an error.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{error, warn};

use crate::commands::{customer, game, order};
use crate::console::Console;
use crate::error::{ConsoleError, ErrorKind};
use gamestore_db::Database;

const MENU: &str = "\n=== Game Store Management System ===\n\
1. Add New Game\n\
2. Update Game Details\n\
3. Display Games by Genre\n\
4. Add New Customer\n\
5. Place Order\n\
6. View Ordered Games\n\
7. Exit";

/// A main menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddGame,
    UpdateGame,
    GamesByGenre,
    AddCustomer,
    PlaceOrder,
    ViewOrders,
    Exit,
}

impl MenuChoice {
    /// Parses the number typed at the menu prompt.
    pub fn from_input(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::AddGame,
            "2" => MenuChoice::UpdateGame,
            "3" => MenuChoice::GamesByGenre,
            "4" => MenuChoice::AddCustomer,
            "5" => MenuChoice::PlaceOrder,
            "6" => MenuChoice::ViewOrders,
            "7" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Menu loop bound to one database handle and one console.
pub struct Shell<R, W> {
    db: Database,
    console: Console<R, W>,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(db: Database, console: Console<R, W>) -> Self {
        Shell { db, console }
    }

    /// Runs until Exit or end of input.
    ///
    /// ## Errors
    /// Only `ConsoleError::Io`; every action failure is reported on the
    /// console and the menu continues.
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            self.console.println(MENU).await?;

            let input = match self.console.prompt("Enter your choice: ").await {
                Ok(input) => Some(input),
                Err(ConsoleError::InputClosed) => return self.exit().await,
                Err(err) if err.is_fatal() => return Err(err),
                Err(_) => None,
            };

            let Some(choice) = input.as_deref().and_then(MenuChoice::from_input) else {
                self.console
                    .println("Invalid choice. Please enter a valid option.")
                    .await?;
                continue;
            };

            if choice == MenuChoice::Exit {
                return self.exit().await;
            }

            match self.dispatch(choice).await {
                Ok(()) => {}
                Err(ConsoleError::InputClosed) => return self.exit().await,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => self.report(choice, &err).await?,
            }
        }
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<(), ConsoleError> {
        let console = &mut self.console;
        let db = &self.db;

        match choice {
            MenuChoice::AddGame => game::add_game(console, db).await,
            MenuChoice::UpdateGame => game::update_game(console, db).await,
            MenuChoice::GamesByGenre => game::display_games_by_genre(console, db).await,
            MenuChoice::AddCustomer => customer::add_customer(console, db).await,
            MenuChoice::PlaceOrder => order::place_order(console, db).await,
            MenuChoice::ViewOrders => order::view_orders(console, db).await,
            MenuChoice::Exit => Ok(()),
        }
    }

    async fn report(&mut self, choice: MenuChoice, err: &ConsoleError) -> Result<(), ConsoleError> {
        match err.kind() {
            ErrorKind::Database | ErrorKind::Io => error!(?choice, error = %err, "Menu action failed"),
            _ => warn!(?choice, error = %err, "Menu action rejected"),
        }
        self.console.println(&err.user_message()).await
    }

    async fn exit(&mut self) -> Result<(), ConsoleError> {
        self.console.println("Exiting...").await
    }

    /// Gives back the console (tests read its output).
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use gamestore_core::OrderDetail;
    use gamestore_db::DbConfig;

    async fn session(db: &Database, script: &str) -> String {
        let console = Console::new(script.as_bytes(), Vec::new());
        let mut shell = Shell::new(db.clone(), console);
        shell.run().await.unwrap();
        String::from_utf8(shell.into_console().into_output()).unwrap()
    }

    async fn store() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MenuChoice::from_input(" 1 "), Some(MenuChoice::AddGame));
        assert_eq!(MenuChoice::from_input("7"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input("8"), None);
        assert_eq!(MenuChoice::from_input("one"), None);
    }

    #[tokio::test]
    async fn test_full_session() {
        let db = store().await;
        let script = "\
1\nChess Quest\n5\n19.99\n3\nDigital\n\
4\nAna\nana@example.com\n\
5\nAna\n1\n\
6\n\
2\n1\nprice\n24.50\n\
3\n5\n\
7\n";

        let output = session(&db, script).await;

        assert!(output.contains("Game added successfully!"));
        assert!(output.contains("5: RPG"));
        assert!(output.contains("Customer ID: 1\nCustomer Name: Ana\nEmail: ana@example.com"));
        assert!(output.contains("Customer added successfully!"));
        assert!(output.contains("Order placed successfully!"));
        assert!(output.contains("Game details updated successfully!"));
        assert!(output.contains("$24.50"));
        assert!(output.ends_with("Exiting...\n"));

        let orders = db.orders();
        let rows: Vec<OrderDetail> = orders.list_with_details().try_collect().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer_name, "Ana");
        assert_eq!(rows[0].game_name, "Chess Quest");

        let game = db.games().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(game.price_cents, 2450);
    }

    #[tokio::test]
    async fn test_bad_input_keeps_menu_running() {
        let db = store().await;
        let script = "\
9\n\
1\nChess Quest\nfive\n\
2\nabc\n\
7\n";

        let output = session(&db, script).await;

        assert!(output.contains("Invalid choice. Please enter a valid option."));
        assert_eq!(output.matches("Invalid input: ").count(), 2);
        assert_eq!(output.matches("=== Game Store Management System ===").count(), 4);
        assert!(output.ends_with("Exiting...\n"));
    }

    #[tokio::test]
    async fn test_update_rejects_field_outside_allow_list() {
        let db = store().await;
        let script = "\
1\nChess Quest\n5\n19.99\n3\nDigital\n\
2\n1\ngame_id; DROP TABLE games\n\
7\n";

        let output = session(&db, script).await;
        assert!(output.contains("field must be one of: game_name, genre_id, price, age_limit, storage"));

        let game = db.games().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(game.game_name, "Chess Quest");
    }

    #[tokio::test]
    async fn test_update_missing_game() {
        let db = store().await;
        let output = session(&db, "2\n42\nstorage\nDisc\n7\n").await;

        assert!(output.contains("Game not found with ID: 42"));
        assert!(!output.contains("Game details updated successfully!"));
    }

    #[tokio::test]
    async fn test_order_for_unknown_customer() {
        let db = store().await;
        let output = session(&db, "5\nNobody\n7\n").await;

        assert!(output.contains("Customer not found. Please add the customer first."));
        assert!(!output.contains("Order placed successfully!"));
    }

    #[tokio::test]
    async fn test_order_with_shared_customer_name_asks_for_id() {
        let db = store().await;
        let script = "\
1\nChess Quest\n5\n19.99\n3\nDigital\n\
4\nAna\nana@example.com\n\
4\nAna\nana.b@example.com\n\
5\nAna\n2\n1\n\
7\n";

        let output = session(&db, script).await;
        assert!(output.contains("Several customers are named Ana: IDs 1, 2"));
        assert!(output.contains("Order placed successfully!"));

        let orders = db.orders();
        let rows: Vec<OrderDetail> = orders.list_with_details().try_collect().await.unwrap();
        assert_eq!(rows[0].email, "ana.b@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_reported() {
        let db = store().await;
        let script = "\
4\nAna\nana@example.com\n\
4\nAnother\nana@example.com\n\
7\n";

        let output = session(&db, script).await;
        assert_eq!(output.matches("Customer added successfully!").count(), 1);
        assert!(output.contains("A customer with email 'ana@example.com' already exists."));
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_returns_to_menu() {
        let db = store().await;
        let script: &'static [u8] = b"\
4\nJos\xe9\n\
\xff\n\
4\nBo\nbo@example.com\n\
7\n";

        let console = Console::new(script, Vec::new());
        let mut shell = Shell::new(db.clone(), console);
        shell.run().await.unwrap();
        let output = String::from_utf8(shell.into_console().into_output()).unwrap();

        assert!(output.contains("Invalid input: "));
        assert!(output.contains("Invalid choice. Please enter a valid option."));
        assert_eq!(output.matches("Customer added successfully!").count(), 1);
        assert!(output.ends_with("Exiting...\n"));

        let ids = db.customers().find_ids_by_name("Bo").await.unwrap();
        assert_eq!(ids.len(), 1);
    }

    #[tokio::test]
    async fn test_order_name_is_trimmed_like_stored_name() {
        let db = store().await;
        let script = "\
1\nChess Quest\n5\n19.99\n3\nDigital\n\
4\nAna \nana@example.com\n\
5\nAna \n1\n\
7\n";

        let output = session(&db, script).await;
        assert!(output.contains("Order placed successfully!"));
        assert!(!output.contains("Customer not found."));
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let db = store().await;

        let output = session(&db, "").await;
        assert!(output.ends_with("Enter your choice: Exiting...\n"));

        // Mid-action end of input behaves the same
        let output = session(&db, "1\nHalf a Game\n").await;
        assert!(output.ends_with("Exiting...\n"));
        assert!(!output.contains("Game added successfully!"));
    }
}
