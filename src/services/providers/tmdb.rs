/// TMDB catalog provider
///
/// Wraps the TMDB v3 REST API for search, title details, recommendation
/// candidates, and watch providers. Every fetch goes through the Redis
/// cache with an endpoint-specific TTL.
///
/// API flow:
/// 1. Search: /search/multi → mixed movie/tv/person entries
/// 2. Details: /movie/{id} or /tv/{id}
/// 3. Candidates: /{movie|tv}/{id}/recommendations (page 1)
/// 4. Providers: /{movie|tv}/{id}/watch/providers, keyed by region
use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::{
        Candidate, MediaItem, MediaType, TitleDetails, TmdbPage, TmdbWatchProvidersResponse,
        WatchProvider,
    },
    services::providers::CatalogProvider,
};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

const SEARCH_CACHE_TTL: u64 = 3600; // 1 hour
const DETAILS_CACHE_TTL: u64 = 86400; // 24 hours
const RECOMMENDATIONS_CACHE_TTL: u64 = 86400; // 24 hours
const PROVIDERS_CACHE_TTL: u64 = 604800; // 1 week

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    /// ISO 3166-1 region used to pick watch provider options
    watch_region: String,
    cache: Cache,
}

impl TmdbProvider {
    pub fn new(cache: Cache, api_key: String, api_url: String, watch_region: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            watch_region,
            cache,
        }
    }

    /// Performs a GET against the TMDB API and decodes the JSON body
    ///
    /// Unknown titles come back as 404 and map to `NotFound`; any other
    /// non-success status becomes an external API error carrying the body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound("Title not found".to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}

/// Parses raw TMDB list entries into candidates, dropping those that do not fit
///
/// Search pages mix movies, TV shows, and people; entries that fail to
/// deserialize (people, unknown kinds) are skipped rather than failing the
/// whole page. Recommendation pages occasionally omit `media_type`, so
/// callers may supply a default to inject before parsing.
fn parse_entries(
    entries: Vec<serde_json::Value>,
    default_media_type: Option<MediaType>,
) -> Vec<Candidate> {
    entries
        .into_iter()
        .filter_map(|mut entry| {
            if let Some(media_type) = default_media_type {
                if let Some(object) = entry.as_object_mut() {
                    object
                        .entry("media_type")
                        .or_insert_with(|| serde_json::json!(media_type));
                }
            }
            serde_json::from_value::<Candidate>(entry).ok()
        })
        .collect()
}

/// Picks one region's flat-rate options out of a watch providers response
///
/// Results are keyed by region; a region with no flat-rate options simply
/// has no entry, which yields an empty list rather than an error.
fn region_flatrate(mut response: TmdbWatchProvidersResponse, region: &str) -> Vec<WatchProvider> {
    response
        .results
        .remove(region)
        .map(|providers| providers.flatrate)
        .unwrap_or_default()
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn search(&self, query: &str) -> AppResult<Vec<MediaItem>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        cached!(
            self.cache,
            CacheKey::Search(query.to_string()),
            SEARCH_CACHE_TTL,
            async move {
                let page: TmdbPage = self.get_json("/search/multi", &[("query", query)]).await?;

                let items: Vec<MediaItem> = parse_entries(page.results, None)
                    .into_iter()
                    .map(MediaItem::from)
                    .collect();

                tracing::info!(
                    query = %query,
                    results = items.len(),
                    provider = "tmdb",
                    "Title search completed"
                );

                Ok::<_, AppError>(items)
            }
        )
    }

    async fn title_details(&self, media_type: MediaType, tmdb_id: u64) -> AppResult<TitleDetails> {
        cached!(
            self.cache,
            CacheKey::Details(media_type, tmdb_id),
            DETAILS_CACHE_TTL,
            async move {
                let details = match media_type {
                    MediaType::Movie => TitleDetails::Movie(
                        self.get_json(&format!("/movie/{}", tmdb_id), &[]).await?,
                    ),
                    MediaType::Tv => {
                        TitleDetails::Tv(self.get_json(&format!("/tv/{}", tmdb_id), &[]).await?)
                    }
                };

                tracing::info!(
                    media_type = %media_type,
                    tmdb_id = tmdb_id,
                    title = %details.title(),
                    provider = "tmdb",
                    "Title details fetched"
                );

                Ok::<_, AppError>(details)
            }
        )
    }

    async fn recommendations(
        &self,
        media_type: MediaType,
        tmdb_id: u64,
    ) -> AppResult<Vec<Candidate>> {
        cached!(
            self.cache,
            CacheKey::Recommendations(media_type, tmdb_id),
            RECOMMENDATIONS_CACHE_TTL,
            async move {
                let page: TmdbPage = self
                    .get_json(&format!("/{}/{}/recommendations", media_type, tmdb_id), &[])
                    .await?;

                // Entries on a movie's page that lack media_type are movies
                // themselves, and likewise for TV.
                let candidates = parse_entries(page.results, Some(media_type));

                tracing::info!(
                    media_type = %media_type,
                    tmdb_id = tmdb_id,
                    candidates = candidates.len(),
                    provider = "tmdb",
                    "Recommendation candidates fetched"
                );

                Ok::<_, AppError>(candidates)
            }
        )
    }

    async fn watch_providers(
        &self,
        media_type: MediaType,
        tmdb_id: u64,
    ) -> AppResult<Vec<WatchProvider>> {
        cached!(
            self.cache,
            CacheKey::WatchProviders(media_type, tmdb_id),
            PROVIDERS_CACHE_TTL,
            async move {
                let response: TmdbWatchProvidersResponse = self
                    .get_json(&format!("/{}/{}/watch/providers", media_type, tmdb_id), &[])
                    .await?;

                let providers = region_flatrate(response, &self.watch_region);

                tracing::info!(
                    media_type = %media_type,
                    tmdb_id = tmdb_id,
                    region = %self.watch_region,
                    providers = providers.len(),
                    provider = "tmdb",
                    "Watch providers fetched"
                );

                Ok::<_, AppError>(providers)
            }
        )
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
