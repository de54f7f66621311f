//! Application state - shared across all handlers.

use std::sync::Arc;

use social_core::ports::PostStore;
use social_infra::{DatabaseConfig, InMemoryPostStore};

#[cfg(feature = "postgres")]
use social_infra::PostgresPostStore;

/// Shared application state.
///
/// Handlers receive the store and open their own session from it.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    /// Build the application state with the configured store.
    pub async fn from_config(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        let Some(config) = db_config else {
            tracing::warn!("No database configured. Running with in-memory post store.");
            return Ok(Self::new(Arc::new(InMemoryPostStore::new())));
        };

        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostStore> = {
            let db = social_infra::database::connect(config).await?;
            Arc::new(PostgresPostStore::new(db))
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostStore> = {
            tracing::warn!(
                url_configured = !config.url.is_empty(),
                "Built without postgres feature - using in-memory post store"
            );
            Arc::new(InMemoryPostStore::new())
        };

        tracing::info!("Application state initialized");
        Ok(Self::new(posts))
    }
}
