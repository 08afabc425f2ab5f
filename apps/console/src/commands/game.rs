//! Game actions: add, update one field, browse by genre.

use futures::TryStreamExt;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use super::{show_games_with_genres, show_genres};
use crate::console::Console;
use crate::error::ConsoleError;
use crate::render;
use gamestore_core::validation::validate_name;
use gamestore_core::{GameField, NewGame};
use gamestore_db::Database;

/// Field prompt listing every allow-listed name.
fn field_prompt() -> String {
    let names: Vec<&str> = GameField::ALL.iter().map(|f| f.name()).collect();
    format!("Enter Field to Update ({}): ", names.join(", "))
}

/// Menu 1: Add New Game.
pub async fn add_game<R, W>(console: &mut Console<R, W>, db: &Database) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.println("\nAdding a New Game:").await?;

    let name = console.prompt("Enter Game Name: ").await?;
    // Fail before the remaining prompts
    validate_name("game name", &name)?;

    show_genres(console, db).await?;

    let genre_id = console.prompt_id("Enter Genre ID: ", "genre id").await?;
    let price = console.prompt_price("Enter Price: ").await?;
    let age_limit = console.prompt_age_limit("Enter Age Limit: ").await?;
    let storage = console.prompt("Enter Storage Medium: ").await?;

    let game = NewGame::new(&name, genre_id, price, age_limit, &storage)?;
    let game_id = db.games().create(&game).await?;

    info!(game_id, name = %game.name, "Game added");
    console.println("Game added successfully!").await
}

/// Menu 2: Update Game Details.
pub async fn update_game<R, W>(
    console: &mut Console<R, W>,
    db: &Database,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.println("\nUpdating Game Details:").await?;

    show_games_with_genres(console, db).await?;

    let game_id = console.prompt_id("Enter Game ID: ", "game id").await?;
    let field: GameField = console.prompt(&field_prompt()).await?.parse()?;

    if field == GameField::GenreId {
        show_genres(console, db).await?;
    }

    let raw = console.prompt("Enter New Value: ").await?;
    let update = field.parse_value(&raw)?;

    db.games().update_field(game_id, &update).await?;

    info!(game_id, field = %field, "Game updated");
    console.println("Game details updated successfully!").await
}

/// Menu 3: Display Games by Genre.
pub async fn display_games_by_genre<R, W>(
    console: &mut Console<R, W>,
    db: &Database,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    show_genres(console, db).await?;

    let genre_id = console.prompt_id("\nEnter Genre ID: ", "genre id").await?;

    console.println(&render::games_header()).await?;

    let games = db.games();
    let mut rows = games.list_by_genre(genre_id);
    while let Some(game) = rows.try_next().await? {
        console.println(&render::game_row(&game)).await?;
    }
    Ok(())
}
