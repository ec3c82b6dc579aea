//! Client-side recipe lookup and meal-planning core.
//!
//! Searches a recipe corpus, normalizes free-text ingredient lines into
//! unit-aware quantities, rescales them to a chosen serving count, and
//! maintains a shopping list and a durably persisted set of liked recipes.

pub mod config;
pub mod error;
pub mod ingredients;
pub mod likes;
pub mod list;
pub mod model;
pub mod scaling;
pub mod session;
pub mod source;
pub mod storage;

pub use crate::config::AppConfig;
pub use crate::error::PlatefulError;
pub use crate::model::{
    format_count, LikeRecord, ParsedIngredient, Recipe, SearchHit, ShoppingListItem,
};
pub use crate::session::{SearchSession, Session};

use crate::source::RecipeClient;

/// Search the recipe corpus with the default configuration.
pub async fn search_recipes(query: &str) -> Result<Vec<SearchHit>, PlatefulError> {
    let client = RecipeClient::new(&AppConfig::default())?;
    client.search(query).await
}

/// Fetch a recipe by id with the default configuration and parse its
/// ingredient lines.
pub async fn fetch_recipe(id: &str) -> Result<Recipe, PlatefulError> {
    let client = RecipeClient::new(&AppConfig::default())?;
    let mut recipe = client.recipe(id).await?;
    recipe.parse_ingredients();
    Ok(recipe)
}
