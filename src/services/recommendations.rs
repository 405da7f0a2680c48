use crate::{
    error::AppResult,
    models::{MediaItem, MediaType},
    services::providers::CatalogProvider,
    services::ranking::{rank, RankConfig, SourceContext},
};

/// Produces the ranked related-titles strip for a single anchor title
///
/// Fetches the anchor's details and its raw recommendation page
/// concurrently, scores the candidates against the anchor's genres and
/// era, and returns the survivors as display items. The anchor itself is
/// excluded unless the caller supplies a different exclusion id.
pub async fn related_titles(
    provider: &dyn CatalogProvider,
    media_type: MediaType,
    tmdb_id: u64,
    exclude_id: Option<String>,
    config: &RankConfig,
) -> AppResult<Vec<MediaItem>> {
    let (details, candidates) = tokio::try_join!(
        provider.title_details(media_type, tmdb_id),
        provider.recommendations(media_type, tmdb_id),
    )?;

    let exclude_id = exclude_id.unwrap_or_else(|| tmdb_id.to_string());
    let source = SourceContext::from_details(&details, exclude_id);

    let ranked = rank(&source, candidates, config);

    tracing::info!(
        media_type = %media_type,
        tmdb_id = tmdb_id,
        results = ranked.len(),
        "Ranked related titles"
    );

    Ok(ranked
        .into_iter()
        .map(|scored| MediaItem::from(scored.candidate))
        .collect())
}
