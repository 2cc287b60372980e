//! Client-side data-access layer for the recipe front-end.
//!
//! # Overview
//! Two API slices — recipe CRUD and a health check — wired into one
//! process-wide [`AppStore`], backed by an in-memory dataset with
//! simulated network latency standing in for a real backend.
//!
//! # Design
//! - The [`RecordStore`] is the single source of truth, owned by the
//!   composition root and shared by handle, never ambient global state.
//! - Query operations are idempotent and side-effect-free; mutations
//!   invalidate cached reads through the [`TagCache`] contract after
//!   their store write commits.
//! - Simulated latency is plain injected configuration, so tests run
//!   with a zero profile and stay deterministic.
//! - The caching layer itself is an external collaborator; this crate
//!   only declares tags and drives invalidation.

pub mod app;
pub mod cache;
pub mod error;
pub mod health;
pub mod latency;
pub mod recipes;
pub mod seed;
pub mod store;
pub mod tags;
pub mod types;

pub use app::{AppConfig, AppStore};
pub use cache::{CacheKey, NullCache, TagCache};
pub use error::ApiError;
pub use health::{HealthApi, HealthStatus};
pub use latency::LatencyProfile;
pub use recipes::RecipeApi;
pub use store::RecordStore;
pub use tags::Tag;
pub use types::{
    DeleteResponse, Difficulty, ListQuery, NewRecipe, Recipe, RecipeId, RecipeListResponse,
};
