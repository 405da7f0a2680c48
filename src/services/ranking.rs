//! Scoring and ordering for recommendation candidates.
//!
//! Given an anchor title (the one the user is looking at) and a page of
//! raw TMDB recommendations, ranks the page by three signals: shared
//! genres, audience vote average, and a same-era bonus. The whole module
//! is synchronous and side-effect free; fetching and caching live in the
//! provider layer.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{Datelike, Utc};

use crate::models::{parse_release_year, Candidate, TitleDetails};

/// Tuning knobs for candidate ranking.
///
/// The defaults are the production values; tests construct custom configs
/// to probe boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct RankConfig {
    /// Candidates below this vote count are dropped as too obscure.
    pub min_vote_count: u32,
    /// Score contribution per genre shared with the anchor.
    pub genre_weight: f64,
    /// Half-width of the era window, in years.
    pub era_window_years: i32,
    /// Flat bonus for candidates released within the era window.
    pub era_bonus: f64,
    /// Maximum number of ranked results returned.
    pub max_results: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            min_vote_count: 50,
            genre_weight: 10.0,
            era_window_years: 10,
            era_bonus: 15.0,
            max_results: 12,
        }
    }
}

/// The anchor title a ranking call scores against.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceContext {
    /// Genre ids of the anchor.
    pub genre_ids: HashSet<u32>,
    /// Release year of the anchor.
    pub year: i32,
    /// Stringified id excluded from results, normally the anchor itself.
    pub exclude_id: String,
}

impl SourceContext {
    pub fn new(genre_ids: HashSet<u32>, year: i32, exclude_id: impl Into<String>) -> Self {
        Self {
            genre_ids,
            year,
            exclude_id: exclude_id.into(),
        }
    }

    /// Builds a context from fetched title details, using the current
    /// calendar year when the anchor's date does not parse.
    pub fn from_details(details: &TitleDetails, exclude_id: impl Into<String>) -> Self {
        Self::from_details_at(details, exclude_id, Utc::now().year())
    }

    /// Like [`SourceContext::from_details`], with an explicit fallback year.
    ///
    /// Undated anchors get `fallback_year`, which deliberately biases the
    /// era bonus toward recent candidates. Taking the year as a parameter
    /// keeps the ranking path clock-free.
    pub fn from_details_at(
        details: &TitleDetails,
        exclude_id: impl Into<String>,
        fallback_year: i32,
    ) -> Self {
        Self {
            genre_ids: details.genre_ids(),
            year: details.year().unwrap_or(fallback_year),
            exclude_id: exclude_id.into(),
        }
    }
}

/// A candidate annotated with its composite score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: f64,
}

/// Filters, scores, and orders recommendation candidates.
///
/// Candidates without a poster, with fewer votes than
/// `config.min_vote_count`, or matching the anchor's `exclude_id` are
/// dropped. Survivors are scored, sorted descending, and truncated to
/// `config.max_results`. The sort is stable, so equally scored candidates
/// keep their upstream order.
pub fn rank(
    source: &SourceContext,
    candidates: Vec<Candidate>,
    config: &RankConfig,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .filter(|candidate| {
            candidate
                .poster_path
                .as_deref()
                .is_some_and(|path| !path.is_empty())
                && candidate.vote_count >= config.min_vote_count
                && candidate.id.to_string() != source.exclude_id
        })
        .map(|candidate| {
            let score = score_candidate(source, &candidate, config);
            ScoredCandidate { candidate, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(config.max_results);
    scored
}

/// Composite score for one candidate.
///
/// `shared_genres * genre_weight + vote_average`, plus `era_bonus` when
/// the candidate's year parses and lands within `era_window_years` of the
/// anchor's year. A candidate with an unparseable date simply earns no
/// bonus.
pub fn score_candidate(source: &SourceContext, candidate: &Candidate, config: &RankConfig) -> f64 {
    let shared_genres = candidate
        .genre_ids
        .iter()
        .filter(|genre| source.genre_ids.contains(genre))
        .count();

    let mut score = shared_genres as f64 * config.genre_weight + candidate.vote_average;

    if let Some(year) = parse_release_year(&candidate.release_date) {
        if (year - source.year).abs() <= config.era_window_years {
            score += config.era_bonus;
        }
    }

    score
}
