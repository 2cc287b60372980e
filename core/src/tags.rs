//! Cache tags attached to read results and declared by mutations.
//!
//! # Design
//! Every read result carries a tag set; every mutation declares the tag
//! set it invalidates. The caching layer evicts a stored entry when any
//! of its carried tags matches the invalidation set. The declaration
//! functions below are the per-endpoint annotations, kept in one place
//! so the slice methods and the cache collaborator agree.

use crate::types::{ListQuery, RecipeId};

/// A label carried by a cached read result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Whole-collection tag, carried by list and search results.
    RecipeList,
    /// Per-record tag, carried by a single fetched recipe.
    Recipe(RecipeId),
}

impl Tag {
    /// Whether an entry carrying `self` goes stale when `invalidated`
    /// is signalled. A collection tag is stale after any recipe
    /// invalidation; a per-record tag only when that exact record is
    /// invalidated.
    pub fn is_invalidated_by(&self, invalidated: &Tag) -> bool {
        match (self, invalidated) {
            (Tag::RecipeList, _) => true,
            (Tag::Recipe(a), Tag::Recipe(b)) => a == b,
            (Tag::Recipe(_), Tag::RecipeList) => false,
        }
    }
}

/// Tags carried by a list result.
pub fn list_provides(_query: &ListQuery) -> Vec<Tag> {
    vec![Tag::RecipeList]
}

/// Tags carried by a search result.
pub fn search_provides(_term: &str) -> Vec<Tag> {
    vec![Tag::RecipeList]
}

/// Tags carried by a single fetched recipe.
pub fn get_provides(id: RecipeId) -> Vec<Tag> {
    vec![Tag::Recipe(id)]
}

/// Tags invalidated by a successful create.
pub fn create_invalidates() -> Vec<Tag> {
    vec![Tag::RecipeList]
}

/// Tags invalidated by a successful update of `id`.
pub fn update_invalidates(id: RecipeId) -> Vec<Tag> {
    vec![Tag::Recipe(id)]
}

/// Tags invalidated by a successful delete.
pub fn delete_invalidates() -> Vec<Tag> {
    vec![Tag::RecipeList]
}
