use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{MediaItem, MediaType, TitleDetails, WatchProvider},
    services::recommendations::related_titles,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    exclude_id: Option<String>,
}

/// Handler for title search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<MediaItem>>> {
    let items = state.catalog.search(&params.q).await?;
    Ok(Json(items))
}

/// Handler for title details
pub async fn details(
    State(state): State<AppState>,
    Path((media_type, id)): Path<(MediaType, u64)>,
) -> AppResult<Json<TitleDetails>> {
    let details = state.catalog.title_details(media_type, id).await?;
    Ok(Json(details))
}

/// Handler for ranked related titles
///
/// `exclude_id` overrides the id dropped from the results, which defaults
/// to the anchor itself.
pub async fn recommend(
    State(state): State<AppState>,
    Path((media_type, id)): Path<(MediaType, u64)>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<Vec<MediaItem>>> {
    let items = related_titles(
        state.catalog.as_ref(),
        media_type,
        id,
        params.exclude_id,
        &state.rank_config,
    )
    .await?;

    Ok(Json(items))
}

/// Handler for flat-rate watch providers
pub async fn watch_providers(
    State(state): State<AppState>,
    Path((media_type, id)): Path<(MediaType, u64)>,
) -> AppResult<Json<Vec<WatchProvider>>> {
    let providers = state.catalog.watch_providers(media_type, id).await?;
    Ok(Json(providers))
}
