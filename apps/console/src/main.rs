//! # Game Store Entry Point
//!
//! ```text
//! gamestore                       # store in the platform data directory
//! gamestore --data-dir ./data     # ./data/games_db.db
//! gamestore --in-memory           # throwaway session
//! ```
//!
//! Exits non-zero only when startup fails (settings, connection, schema).

use clap::Parser;

use gamestore_console::config::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    gamestore_console::run(Cli::parse()).await
}
