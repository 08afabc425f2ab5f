//! # Game Store Console
//!
//! Library behind the `gamestore` binary: settings, logging, the menu
//! shell and its actions.
//!
//! ## Module Organization
//! ```text
//! gamestore_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── CLI flags + layered settings
//! ├── console.rs      ◄─── Prompted line input over async streams
//! ├── shell.rs        ◄─── 7-item menu loop
//! ├── commands/
//! │   ├── game.rs     ◄─── Add / update / browse games
//! │   ├── customer.rs ◄─── Add customers
//! │   └── order.rs    ◄─── Place / view orders
//! ├── render.rs       ◄─── Fixed-width tables
//! └── error.rs        ◄─── ConsoleError and user messages
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod render;
pub mod shell;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Settings};
use crate::console::Console;
use crate::shell::Shell;
use gamestore_db::Database;

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Settings ──────────────────────────────────────── fatal ─────► │
/// │     • defaults → TOML → GAMESTORE_* → flags                             │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG wins, else the log_filter setting                        │
/// │                                                                         │
/// │  3. Open Database ─────────────────────────────────────── fatal ─────► │
/// │     • Create file, tables, seed genres                                  │
/// │                                                                         │
/// │  4. Menu Loop on stdin/stdout ────────────────────────────────────────► │
/// │     • Action failures are shown, never fatal                            │
/// │                                                                         │
/// │  5. Close Database ───────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(&cli)?;

    init_tracing(&settings.log_filter);

    info!(store = %settings.store_label(), "Starting game store");

    let db = Database::new(settings.db_config()?).await?;

    let console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    let mut shell = Shell::new(db.clone(), console);
    let outcome = shell.run().await;

    db.close().await;
    outcome?;

    info!("Game store stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix into the menu on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=gamestore_db=trace` - Trace the store only
/// - Default: the `log_filter` setting
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
