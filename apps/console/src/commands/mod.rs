//! # Menu Actions
//!
//! One module per record type. Every action takes the console and the
//! database handle explicitly and returns `Result<(), ConsoleError>`;
//! the shell decides what to do with failures.
//!
//! ```text
//! commands/
//! ├── game.rs      ◄─── Add game, update game, games by genre
//! ├── customer.rs  ◄─── Add customer
//! └── order.rs     ◄─── Place order, view ordered games
//! ```

pub mod customer;
pub mod game;
pub mod order;

use futures::TryStreamExt;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::console::Console;
use crate::error::ConsoleError;
use crate::render;
use gamestore_db::Database;

/// Prints every genre as `id: name`.
pub(crate) async fn show_genres<R, W>(
    console: &mut Console<R, W>,
    db: &Database,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.println(render::GENRES_HEADING).await?;

    let genres = db.genres();
    let mut rows = genres.list_all();
    while let Some(genre) = rows.try_next().await? {
        console.println(&render::genre_line(&genre)).await?;
    }
    Ok(())
}

/// Prints the game table with genre names.
pub(crate) async fn show_games_with_genres<R, W>(
    console: &mut Console<R, W>,
    db: &Database,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.println(&render::games_with_genre_header()).await?;

    let games = db.games();
    let mut rows = games.list_with_genre_names();
    while let Some(game) = rows.try_next().await? {
        console.println(&render::game_with_genre_row(&game)).await?;
    }
    Ok(())
}
