pub mod tmdb;

use crate::error::AppResult;
use crate::models::{Candidate, MediaItem, MediaType, TitleDetails, WatchProvider};
use async_trait::async_trait;

/// Common interface for catalog data providers.
///
/// Implementations fetch title metadata from an upstream catalog and are
/// responsible for their own caching. Handlers depend on this trait rather
/// than a concrete client so tests can swap in canned data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search across movies and TV shows by free-text query.
    async fn search(&self, query: &str) -> AppResult<Vec<MediaItem>>;

    /// Fetch full details for a single title.
    async fn title_details(&self, media_type: MediaType, tmdb_id: u64) -> AppResult<TitleDetails>;

    /// Fetch the raw recommendation candidates for a title, unranked.
    async fn recommendations(&self, media_type: MediaType, tmdb_id: u64)
        -> AppResult<Vec<Candidate>>;

    /// Fetch the flat-rate streaming providers for a title in the
    /// configured region.
    async fn watch_providers(
        &self,
        media_type: MediaType,
        tmdb_id: u64,
    ) -> AppResult<Vec<WatchProvider>>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}
