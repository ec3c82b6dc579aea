//! HTTP client for the recipe API.

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::PlatefulError;
use crate::model::{Recipe, SearchHit, DEFAULT_SERVINGS};

/// Async client over the upstream recipe API. Base URL and timeout come
/// from [`AppConfig`], so tests can point it at a local mock server.
pub struct RecipeClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    recipes: Vec<WireRecipe>,
}

#[derive(Debug, Deserialize)]
struct RecipeResponse {
    recipe: WireRecipe,
}

/// Upstream JSON shape, shared between the search and get endpoints. The
/// search endpoint omits `ingredients`.
#[derive(Debug, Deserialize)]
struct WireRecipe {
    recipe_id: String,
    title: String,
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    source_url: String,
    ingredients: Option<Vec<String>>,
}

impl RecipeClient {
    pub fn new(config: &AppConfig) -> Result<Self, PlatefulError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent("Mozilla/5.0 (compatible; Plateful/1.0)")
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search the corpus. Network and non-2xx failures surface as
    /// [`PlatefulError::Fetch`]; there is no retry.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, PlatefulError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?;
        let body: SearchResponse = response.json().await?;
        debug!("search {query:?} returned {} recipes", body.recipes.len());

        Ok(body
            .recipes
            .into_iter()
            .map(|wire| SearchHit {
                id: wire.recipe_id,
                title: wire.title,
                publisher: wire.publisher,
                image_url: wire.image_url,
            })
            .collect())
    }

    /// Fetch one recipe by id. The ingredient lines come back raw; the
    /// caller runs the parser over them.
    pub async fn recipe(&self, id: &str) -> Result<Recipe, PlatefulError> {
        let url = format!("{}/get", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("rId", id)])
            .send()
            .await?
            .error_for_status()?;
        let body: RecipeResponse = response.json().await?;
        let wire = body.recipe;

        let ingredient_lines = wire
            .ingredients
            .ok_or_else(|| PlatefulError::Api(format!("recipe {id} has no ingredient list")))?;

        Ok(Recipe {
            id: wire.recipe_id,
            title: wire.title,
            publisher: wire.publisher,
            image_url: wire.image_url,
            source_url: wire.source_url,
            ingredient_lines,
            ingredients: Vec::new(),
            servings: DEFAULT_SERVINGS,
            cook_time: 0,
        })
    }
}
