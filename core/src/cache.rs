//! Contract with the external request-caching layer.
//!
//! # Design
//! The caching layer itself lives outside this crate; the slices only
//! depend on its contract:
//!
//! 1. at most one in-flight request runs per distinct [`CacheKey`] —
//!    concurrent callers share the pending result;
//! 2. a successful read is retained under its key, together with the
//!    tags the endpoint provides, until invalidated or evicted;
//! 3. [`TagCache::invalidate`] discards every entry carrying a tag
//!    matched by the invalidation set (see [`Tag::is_invalidated_by`])
//!    and triggers a refetch for any subscribed consumer.
//!
//! The mutation engine drives only point 3; points 1 and 2 are the
//! collaborator's read-side behavior and are exercised against an
//! in-memory double in the integration tests.

use serde::Serialize;

use crate::error::ApiError;
use crate::tags::Tag;

/// Key identifying one cached read result: the endpoint name plus its
/// JSON-serialized argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub endpoint: &'static str,
    pub argument: String,
}

impl CacheKey {
    /// Build a key from an endpoint name and its argument value.
    pub fn new<A: Serialize>(endpoint: &'static str, argument: &A) -> Result<Self, ApiError> {
        let argument = serde_json::to_string(argument)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(Self { endpoint, argument })
    }
}

/// Facade of the request-caching collaborator, as seen by the slices.
pub trait TagCache: Send + Sync {
    /// Discard every cached entry whose tag set intersects `tags`.
    /// Called by mutations strictly after their store write commits, so
    /// a triggered refetch always observes the new state.
    fn invalidate(&self, tags: &[Tag]);
}

/// No-op collaborator for wiring the slices without a caching layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCache;

impl TagCache for NullCache {
    fn invalidate(&self, _tags: &[Tag]) {}
}
