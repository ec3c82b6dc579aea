//! Session state and controllers.
//!
//! One [`Session`] owns all in-memory state for the life of the process:
//! at most one cached search result set, at most one open recipe, a lazily
//! created shopping list and the favorites store rehydrated at startup.
//! Search and recipe state are replaced wholesale on each new action; a
//! failed fetch leaves the corresponding state unset so retrying is just
//! re-triggering the action.

use log::debug;

use crate::config::AppConfig;
use crate::error::PlatefulError;
use crate::likes::Likes;
use crate::list::ShoppingList;
use crate::model::{LikeRecord, Recipe, SearchHit};
use crate::source::RecipeClient;
use crate::storage::KeyValueStore;

/// One search's cached results with page slicing. Pages are 1-based.
pub struct SearchSession {
    pub query: String,
    pub results: Vec<SearchHit>,
    per_page: usize,
}

impl SearchSession {
    fn new(query: String, results: Vec<SearchHit>, per_page: usize) -> Self {
        Self {
            query,
            results,
            per_page: per_page.max(1),
        }
    }

    pub fn num_pages(&self) -> usize {
        self.results.len().div_ceil(self.per_page)
    }

    /// The slice of results for a page; out-of-range pages are empty.
    pub fn page(&self, page: usize) -> &[SearchHit] {
        if page == 0 {
            return &[];
        }
        let start = (page - 1) * self.per_page;
        if start >= self.results.len() {
            return &[];
        }
        let end = (start + self.per_page).min(self.results.len());
        &self.results[start..end]
    }
}

/// Token identifying one in-flight fetch. A completed fetch whose token is
/// no longer current is discarded instead of clobbering newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Process-wide session state plus the controllers that drive it.
pub struct Session {
    client: RecipeClient,
    results_per_page: usize,
    search: Option<SearchSession>,
    recipe: Option<Recipe>,
    list: Option<ShoppingList>,
    likes: Likes,
    generation: u64,
}

impl Session {
    /// Build a session and rehydrate liked recipes from durable storage.
    pub fn new(config: &AppConfig, store: Box<dyn KeyValueStore>) -> Result<Self, PlatefulError> {
        let mut likes = Likes::new(store);
        likes.read_storage()?;
        Ok(Self {
            client: RecipeClient::new(config)?,
            results_per_page: config.results_per_page,
            search: None,
            recipe: None,
            list: None,
            likes,
            generation: 0,
        })
    }

    /// Start a fetch, invalidating any earlier in-flight one.
    pub fn begin_fetch(&mut self) -> Generation {
        self.generation += 1;
        Generation(self.generation)
    }

    /// Apply a completed search fetch, unless a newer fetch has started
    /// since. Returns the installed session, or `None` when stale.
    pub fn finish_search(
        &mut self,
        generation: Generation,
        query: String,
        results: Vec<SearchHit>,
    ) -> Option<&SearchSession> {
        if generation.0 != self.generation {
            debug!("discarding stale search response for {query:?}");
            return None;
        }
        self.search = Some(SearchSession::new(query, results, self.results_per_page));
        self.search.as_ref()
    }

    /// Apply a completed recipe fetch, parsing its ingredient lines and
    /// deriving servings and cook time. Returns `None` when stale.
    pub fn finish_recipe(&mut self, generation: Generation, mut recipe: Recipe) -> Option<&Recipe> {
        if generation.0 != self.generation {
            debug!("discarding stale recipe response for {}", recipe.id);
            return None;
        }
        recipe.parse_ingredients();
        self.recipe = Some(recipe);
        self.recipe.as_ref()
    }

    /// Fetch and install search results for a query.
    pub async fn run_search(&mut self, query: &str) -> Result<&SearchSession, PlatefulError> {
        self.search = None;
        let generation = self.begin_fetch();
        let results = self.client.search(query).await?;
        self.finish_search(generation, query.to_string(), results)
            .ok_or_else(|| PlatefulError::Api("search superseded before completion".to_string()))
    }

    /// Fetch and install one recipe, parsed and ready to display.
    pub async fn open_recipe(&mut self, id: &str) -> Result<&Recipe, PlatefulError> {
        self.recipe = None;
        let generation = self.begin_fetch();
        let recipe = self.client.recipe(id).await?;
        self.finish_recipe(generation, recipe)
            .ok_or_else(|| PlatefulError::Api("recipe view superseded before completion".to_string()))
    }

    /// Rescale the open recipe. The minimum of one serving is enforced
    /// here, at the user-intent boundary, so the scaler never sees zero.
    pub fn adjust_servings(&mut self, new_servings: u32) -> Result<(), PlatefulError> {
        if new_servings < 1 {
            return Err(PlatefulError::InvalidServings(new_servings));
        }
        match self.recipe.as_mut() {
            Some(recipe) => recipe.update_servings(new_servings),
            None => Ok(()),
        }
    }

    /// Copy the open recipe's (possibly scaled) ingredients onto the
    /// shopping list, creating the list on first use. The copies have an
    /// independent lifecycle: replacing the recipe later does not touch
    /// them. Returns the ids of the items added.
    pub fn add_recipe_to_list(&mut self) -> Vec<u64> {
        let Some(recipe) = &self.recipe else {
            return Vec::new();
        };
        let list = self.list.get_or_insert_with(ShoppingList::new);
        recipe
            .ingredients
            .iter()
            .map(|ing| {
                list.add_item(ing.count, ing.unit.clone(), ing.ingredient.clone())
                    .id
            })
            .collect()
    }

    /// Like the open recipe if it is not liked, unlike it otherwise.
    /// Returns the new liked state; `false` with no recipe open.
    pub fn toggle_like(&mut self) -> Result<bool, PlatefulError> {
        let Some(recipe) = &self.recipe else {
            return Ok(false);
        };
        if self.likes.is_liked(&recipe.id) {
            self.likes.delete_like(&recipe.id)?;
            Ok(false)
        } else {
            self.likes.add_like(LikeRecord {
                id: recipe.id.clone(),
                title: recipe.title.clone(),
                publisher: recipe.publisher.clone(),
                image_url: recipe.image_url.clone(),
            })?;
            Ok(true)
        }
    }

    pub fn search(&self) -> Option<&SearchSession> {
        self.search.as_ref()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn shopping_list(&self) -> Option<&ShoppingList> {
        self.list.as_ref()
    }

    pub fn shopping_list_mut(&mut self) -> &mut ShoppingList {
        self.list.get_or_insert_with(ShoppingList::new)
    }

    pub fn likes(&self) -> &Likes {
        &self.likes
    }

    pub fn likes_mut(&mut self) -> &mut Likes {
        &mut self.likes
    }
}
