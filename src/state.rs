use std::sync::Arc;

use sqlx::PgPool;

use crate::db::WatchlistStore;
use crate::services::providers::CatalogProvider;
use crate::services::ranking::RankConfig;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub store: WatchlistStore,
    pub rank_config: RankConfig,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogProvider>, pool: PgPool) -> Self {
        Self {
            catalog,
            store: WatchlistStore::new(pool),
            rank_config: RankConfig::default(),
        }
    }
}
