//! In-memory record store: the single source of truth for recipes.
//!
//! # Design
//! An ordered `Vec<Recipe>` plus a monotonic id counter behind one
//! `tokio::sync::RwLock`. Every operation takes the lock once and holds
//! no suspension point inside the critical section, so no caller ever
//! observes a half-applied mutation. The counter is seeded past the
//! largest seed id and never reset, which keeps assigned ids strictly
//! increasing even after the store has been emptied by deletes.

use tokio::sync::RwLock;

use crate::types::{NewRecipe, Recipe, RecipeId};

#[derive(Debug)]
struct Inner {
    records: Vec<Recipe>,
    next_id: RecipeId,
}

/// Ordered, process-lifetime collection of recipes. Insertion order is
/// preserved; reads never reorder.
#[derive(Debug)]
pub struct RecordStore {
    inner: RwLock<Inner>,
}

impl RecordStore {
    /// Create a store holding `seed` in the given order.
    pub fn new(seed: Vec<Recipe>) -> Self {
        let next_id = seed.iter().map(|r| r.id).max().map_or(1, |max| max + 1);
        Self {
            inner: RwLock::new(Inner {
                records: seed,
                next_id,
            }),
        }
    }

    /// Current number of records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Snapshot of the full collection in insertion order.
    pub async fn all(&self) -> Vec<Recipe> {
        self.inner.read().await.records.clone()
    }

    pub async fn find_by_id(&self, id: RecipeId) -> Option<Recipe> {
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Assign the next id, append, and return the stored record.
    pub async fn insert(&self, new: NewRecipe) -> Recipe {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let recipe = new.into_recipe(id);
        inner.records.push(recipe.clone());
        recipe
    }

    /// Replace the record whose id matches `recipe.id` wholesale.
    /// Returns false, leaving the store untouched, when no record
    /// matches.
    pub async fn replace_by_id(&self, recipe: Recipe) -> bool {
        let mut inner = self.inner.write().await;
        match inner.records.iter_mut().find(|r| r.id == recipe.id) {
            Some(slot) => {
                *slot = recipe;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. Returns false when absent.
    pub async fn remove_by_id(&self, id: RecipeId) -> bool {
        let mut inner = self.inner.write().await;
        match inner.records.iter().position(|r| r.id == id) {
            Some(index) => {
                inner.records.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;

    fn new_recipe(title: &str) -> NewRecipe {
        NewRecipe {
            title: title.to_string(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            prep_time: 1,
            cook_time: 1,
            servings: 1,
            difficulty: Difficulty::Easy,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = RecordStore::new(Vec::new());
        let first = store.insert(new_recipe("a")).await;
        let second = store.insert(new_recipe("b")).await;
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn ids_stay_monotonic_after_emptying_the_store() {
        let store = RecordStore::new(Vec::new());
        let first = store.insert(new_recipe("a")).await;
        assert!(store.remove_by_id(first.id).await);
        assert!(store.is_empty().await);

        let second = store.insert(new_recipe("b")).await;
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn counter_starts_past_the_largest_seed_id() {
        let seed = vec![
            new_recipe("a").into_recipe(4),
            new_recipe("b").into_recipe(2),
        ];
        let store = RecordStore::new(seed);
        let inserted = store.insert(new_recipe("c")).await;
        assert_eq!(inserted.id, 5);
    }

    #[tokio::test]
    async fn replace_swaps_the_record_in_place() {
        let store = RecordStore::new(vec![
            new_recipe("a").into_recipe(1),
            new_recipe("b").into_recipe(2),
        ]);
        let mut updated = new_recipe("b2").into_recipe(2);
        updated.servings = 8;
        assert!(store.replace_by_id(updated.clone()).await);
        assert_eq!(store.find_by_id(2).await, Some(updated));
        // Order is untouched by replacement.
        let titles: Vec<String> = store.all().await.into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["a", "b2"]);
    }

    #[tokio::test]
    async fn replace_missing_id_is_a_noop() {
        let store = RecordStore::new(vec![new_recipe("a").into_recipe(1)]);
        assert!(!store.replace_by_id(new_recipe("x").into_recipe(9)).await);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.find_by_id(1).await.unwrap().title, "a");
    }

    #[tokio::test]
    async fn remove_preserves_insertion_order_of_the_rest() {
        let store = RecordStore::new(vec![
            new_recipe("a").into_recipe(1),
            new_recipe("b").into_recipe(2),
            new_recipe("c").into_recipe(3),
        ]);
        assert!(store.remove_by_id(2).await);
        assert!(!store.remove_by_id(2).await);
        let ids: Vec<RecipeId> = store.all().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
