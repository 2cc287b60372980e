//! Composition root: one process-wide instance wiring both API slices.

use std::sync::Arc;

use tracing::info;

use crate::cache::{NullCache, TagCache};
use crate::health::HealthApi;
use crate::latency::LatencyProfile;
use crate::recipes::RecipeApi;
use crate::seed;
use crate::store::RecordStore;

/// Application-level configuration for the data-access layer.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub latency: LatencyProfile,
    /// Base URL of the external health service.
    pub health_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            latency: LatencyProfile::default(),
            health_base_url: "http://localhost:8000/api/v1".to_string(),
        }
    }
}

/// Process-wide store aggregating the recipe and health slices.
/// Constructed once at application start; lives until teardown.
#[derive(Clone)]
pub struct AppStore {
    pub recipes: RecipeApi,
    pub health: HealthApi,
}

impl AppStore {
    /// Wire the slices without a caching layer.
    pub fn new(config: AppConfig) -> Self {
        Self::with_cache(config, Arc::new(NullCache))
    }

    /// Wire the slices against a caching collaborator.
    pub fn with_cache(config: AppConfig, cache: Arc<dyn TagCache>) -> Self {
        let records = seed::sample_recipes();
        info!(seeded = records.len(), "initializing app store");
        let store = Arc::new(RecordStore::new(records));
        Self {
            recipes: RecipeApi::new(store, cache, config.latency),
            health: HealthApi::new(&config.health_base_url),
        }
    }
}
