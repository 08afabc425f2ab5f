//! # Table Rendering
//!
//! Fixed-width console rows. Headers and rows share one column layout per
//! table so rows line up under their headings while they stream in.
//!
//! ```text
//! Game ID    Game Name                      Price           Age Limit  Storage         Genre
//! --------------------------------------------------------------------------------------------
//! 1          Chess Quest                    $19.99          3          Digital         RPG
//! ```

use gamestore_core::{Customer, Game, GameWithGenre, Genre, OrderDetail};

const WIDE_RULE: usize = 92;
const NARROW_RULE: usize = 74;

pub const GENRES_HEADING: &str = "\nAvailable Genres:";

pub fn genre_line(genre: &Genre) -> String {
    format!("{}: {}", genre.genre_id, genre.genre_name)
}

// =============================================================================
// Games
// =============================================================================

pub fn games_header() -> String {
    let heading = format!(
        "{:<10} {:<30} {:<15} {:<10} {:<15}",
        "Game ID", "Game Name", "Price", "Age Limit", "Storage"
    );
    format!("\n{}\n{}", heading.trim_end(), "-".repeat(NARROW_RULE))
}

pub fn game_row(game: &Game) -> String {
    let row = format!(
        "{:<10} {:<30} {:<15} {:<10} {:<15}",
        game.game_id,
        game.game_name,
        game.price(),
        game.age_limit,
        game.storage
    );
    row.trim_end().to_string()
}

pub fn games_with_genre_header() -> String {
    let heading = format!(
        "{:<10} {:<30} {:<15} {:<10} {:<15} {:<20}",
        "Game ID", "Game Name", "Price", "Age Limit", "Storage", "Genre"
    );
    format!("\n{}\n{}", heading.trim_end(), "-".repeat(WIDE_RULE))
}

pub fn game_with_genre_row(game: &GameWithGenre) -> String {
    let row = format!(
        "{:<10} {:<30} {:<15} {:<10} {:<15} {:<20}",
        game.game_id,
        game.game_name,
        game.price(),
        game.age_limit,
        game.storage,
        game.genre_name
    );
    row.trim_end().to_string()
}

// =============================================================================
// Customers & Orders
// =============================================================================

pub fn customer_details(customer: &Customer) -> String {
    format!(
        "\nCustomer ID: {}\nCustomer Name: {}\nEmail: {}",
        customer.customer_id, customer.customer_name, customer.email
    )
}

pub fn orders_header() -> String {
    let heading = format!(
        "{:<10} {:<20} {:<30} {:<30} {:<15}",
        "Order ID", "Customer Name", "Email", "Game Name", "Order Date"
    );
    format!("\n{}\n{}", heading.trim_end(), "-".repeat(WIDE_RULE))
}

pub fn order_row(order: &OrderDetail) -> String {
    let row = format!(
        "{:<10} {:<20} {:<30} {:<30} {:<15}",
        order.order_id,
        order.customer_name,
        order.email,
        order.game_name,
        order.order_date.to_string()
    );
    row.trim_end().to_string()
}
