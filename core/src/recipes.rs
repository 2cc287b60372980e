//! Recipe API slice: the query and mutation operations over the record
//! store.
//!
//! # Design
//! `RecipeApi` holds a shared store handle, the cache collaborator, and
//! a latency profile; it carries no per-call state. Each operation
//! suspends once for its simulated round-trip, then does all store
//! access inside a single lock acquisition. Mutations signal their
//! invalidation tags only after the store write has committed, so a
//! refetch triggered by the cache layer always observes the new state.

use std::sync::Arc;

use tracing::debug;

use crate::cache::TagCache;
use crate::error::ApiError;
use crate::latency::{simulate, LatencyProfile};
use crate::store::RecordStore;
use crate::tags;
use crate::types::{DeleteResponse, ListQuery, NewRecipe, Recipe, RecipeId, RecipeListResponse};

/// Read/write surface for recipes, consumed by UI components.
#[derive(Clone)]
pub struct RecipeApi {
    store: Arc<RecordStore>,
    cache: Arc<dyn TagCache>,
    latency: LatencyProfile,
}

impl RecipeApi {
    pub fn new(store: Arc<RecordStore>, cache: Arc<dyn TagCache>, latency: LatencyProfile) -> Self {
        Self {
            store,
            cache,
            latency,
        }
    }

    /// One page of the collection, in insertion order. An out-of-range
    /// page yields an empty slice, never an error; `total` always
    /// reports the full store size.
    pub async fn get_recipes(&self, query: ListQuery) -> RecipeListResponse {
        simulate(self.latency.list).await;

        let all = self.store.all().await;
        let total = all.len();
        let start = (query.page.saturating_sub(1) as usize).saturating_mul(query.limit as usize);
        let end = start.saturating_add(query.limit as usize).min(total);
        let recipes = if start < total {
            all[start..end].to_vec()
        } else {
            Vec::new()
        };
        debug!(
            page = query.page,
            limit = query.limit,
            returned = recipes.len(),
            total,
            "listed recipes"
        );

        RecipeListResponse {
            recipes,
            total,
            page: query.page,
            limit: query.limit,
        }
    }

    /// Fetch a single recipe by id.
    pub async fn get_recipe(&self, id: RecipeId) -> Result<Recipe, ApiError> {
        simulate(self.latency.get).await;

        self.store
            .find_by_id(id)
            .await
            .ok_or(ApiError::NotFound { id })
    }

    /// All recipes whose title or description contains `term`,
    /// case-insensitively. An empty term matches everything.
    pub async fn search_recipes(&self, term: &str) -> Vec<Recipe> {
        simulate(self.latency.search).await;

        let needle = term.to_lowercase();
        let matches: Vec<Recipe> = self
            .store
            .all()
            .await
            .into_iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
            })
            .collect();
        debug!(term, matched = matches.len(), "searched recipes");
        matches
    }

    /// Create a recipe; the store assigns the id. Always succeeds.
    pub async fn create_recipe(&self, input: NewRecipe) -> Recipe {
        simulate(self.latency.create).await;

        let recipe = self.store.insert(input).await;
        debug!(id = recipe.id, "created recipe");
        self.cache.invalidate(&tags::create_invalidates());
        recipe
    }

    /// Replace the record matching `recipe.id` wholesale. A missing id
    /// fails with `NotFound` and leaves the store untouched.
    pub async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, ApiError> {
        simulate(self.latency.update).await;

        let id = recipe.id;
        if !self.store.replace_by_id(recipe.clone()).await {
            return Err(ApiError::NotFound { id });
        }
        debug!(id, "updated recipe");
        self.cache.invalidate(&tags::update_invalidates(id));
        Ok(recipe)
    }

    /// Remove the record with `id`. A missing id fails with `NotFound`
    /// and leaves the store untouched.
    pub async fn delete_recipe(&self, id: RecipeId) -> Result<DeleteResponse, ApiError> {
        simulate(self.latency.delete).await;

        if !self.store.remove_by_id(id).await {
            return Err(ApiError::NotFound { id });
        }
        debug!(id, "deleted recipe");
        self.cache.invalidate(&tags::delete_invalidates());
        Ok(DeleteResponse { success: true })
    }
}
