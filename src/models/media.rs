use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

/// Kind of catalog title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movie => write!(f, "movie"),
            MediaType::Tv => write!(f, "tv"),
        }
    }
}

/// Extracts the release year from a TMDB date string ("2014-11-05" -> 2014)
///
/// Only a leading component of exactly four digits counts as a year.
/// Empty strings, free-form text, and partial dates yield `None`.
pub fn parse_release_year(date: &str) -> Option<i32> {
    let year = date.split('-').next().unwrap_or_default();
    if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) {
        year.parse().ok()
    } else {
        None
    }
}

/// One rankable entry from a TMDB list payload (search page, recommendation page)
///
/// TV entries arrive with `name`/`first_air_date` instead of
/// `title`/`release_date`; the serde aliases fold both shapes into one struct.
/// Entries whose `media_type` is neither movie nor tv (people, collections)
/// fail to deserialize and are dropped by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u64,
    pub media_type: MediaType,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default, alias = "first_air_date")]
    pub release_date: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// Normalized title shape returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub tmdb_id: u64,
    pub title: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub release_year: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl From<Candidate> for MediaItem {
    fn from(candidate: Candidate) -> Self {
        let release_year = parse_release_year(&candidate.release_date)
            .map(|year| year.to_string())
            .unwrap_or_default();

        MediaItem {
            id: candidate.id.to_string(),
            tmdb_id: candidate.id,
            title: candidate.title,
            media_type: candidate.media_type,
            release_year,
            poster_path: candidate.poster_path,
            overview: candidate.overview,
        }
    }
}

/// Genre tag on a details payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbGenre {
    pub id: u32,
    pub name: String,
}

/// Movie details from GET /movie/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbMovieDetails {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// TV show details from GET /tv/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbTvDetails {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub first_air_date: String,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// Full details for a single title
///
/// TMDB serves movies and TV shows from different endpoints with different
/// field names. This sum type keeps both raw shapes and exposes the fields
/// the rest of the application needs through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mediaType", rename_all = "lowercase")]
pub enum TitleDetails {
    Movie(TmdbMovieDetails),
    Tv(TmdbTvDetails),
}

impl TitleDetails {
    pub fn media_type(&self) -> MediaType {
        match self {
            TitleDetails::Movie(_) => MediaType::Movie,
            TitleDetails::Tv(_) => MediaType::Tv,
        }
    }

    pub fn tmdb_id(&self) -> u64 {
        match self {
            TitleDetails::Movie(details) => details.id,
            TitleDetails::Tv(details) => details.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            TitleDetails::Movie(details) => &details.title,
            TitleDetails::Tv(details) => &details.name,
        }
    }

    /// Genre ids as a set, ready for intersection with candidate genres
    pub fn genre_ids(&self) -> HashSet<u32> {
        let genres = match self {
            TitleDetails::Movie(details) => &details.genres,
            TitleDetails::Tv(details) => &details.genres,
        };
        genres.iter().map(|genre| genre.id).collect()
    }

    /// Release date for movies, first air date for TV shows
    pub fn release_date(&self) -> &str {
        match self {
            TitleDetails::Movie(details) => &details.release_date,
            TitleDetails::Tv(details) => &details.first_air_date,
        }
    }

    pub fn year(&self) -> Option<i32> {
        parse_release_year(self.release_date())
    }
}

/// Paged list response from TMDB
///
/// Entries stay as raw JSON so callers can decide which parse into
/// candidates and which are dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

/// A single streaming option from the watch providers endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchProvider {
    pub provider_id: u32,
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
}

/// Response from GET /{movie|tv}/{id}/watch/providers
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbWatchProvidersResponse {
    #[serde(default)]
    pub results: HashMap<String, TmdbRegionProviders>,
}

/// Streaming options for one region, keyed by monetization kind
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbRegionProviders {
    #[serde(default)]
    pub flatrate: Vec<WatchProvider>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_display() {
        assert_eq!(format!("{}", MediaType::Movie), "movie");
        assert_eq!(format!("{}", MediaType::Tv), "tv");
    }

    #[test]
    fn test_media_type_serde() {
        assert_eq!(serde_json::to_string(&MediaType::Tv).unwrap(), r#""tv""#);
        let parsed: MediaType = serde_json::from_str(r#""movie""#).unwrap();
        assert_eq!(parsed, MediaType::Movie);
    }

    #[test]
    fn test_parse_release_year_full_date() {
        assert_eq!(parse_release_year("2014-11-05"), Some(2014));
    }

    #[test]
    fn test_parse_release_year_bare_year() {
        assert_eq!(parse_release_year("1999"), Some(1999));
    }

    #[test]
    fn test_parse_release_year_empty() {
        assert_eq!(parse_release_year(""), None);
    }

    #[test]
    fn test_parse_release_year_garbage() {
        assert_eq!(parse_release_year("unknown"), None);
        assert_eq!(parse_release_year("199x-01-01"), None);
    }

    #[test]
    fn test_parse_release_year_undelimited_date() {
        // No dash separators, so the leading component is eight digits long
        assert_eq!(parse_release_year("20141105"), None);
    }

    #[test]
    fn test_parse_release_year_leading_dash() {
        assert_eq!(parse_release_year("-2014-11-05"), None);
    }

    #[test]
    fn test_candidate_deserializes_movie_entry() {
        let json = r#"{
            "id": 157336,
            "media_type": "movie",
            "title": "Interstellar",
            "genre_ids": [12, 18, 878],
            "vote_count": 12000,
            "vote_average": 8.4,
            "release_date": "2014-11-05",
            "poster_path": "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
            "overview": "A team of explorers travel through a wormhole."
        }"#;

        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.id, 157336);
        assert_eq!(candidate.media_type, MediaType::Movie);
        assert_eq!(candidate.title, "Interstellar");
        assert_eq!(candidate.genre_ids, vec![12, 18, 878]);
        assert_eq!(candidate.vote_count, 12000);
        assert_eq!(candidate.release_date, "2014-11-05");
    }

    #[test]
    fn test_candidate_deserializes_tv_entry_via_aliases() {
        let json = r#"{
            "id": 1396,
            "media_type": "tv",
            "name": "Breaking Bad",
            "genre_ids": [18, 80],
            "vote_count": 9000,
            "vote_average": 8.9,
            "first_air_date": "2008-01-20",
            "poster_path": "/ggFHVNu6YYI5L9pCfOacjizRGt.jpg"
        }"#;

        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.media_type, MediaType::Tv);
        assert_eq!(candidate.title, "Breaking Bad");
        assert_eq!(candidate.release_date, "2008-01-20");
    }

    #[test]
    fn test_candidate_rejects_person_entry() {
        let json = r#"{
            "id": 6193,
            "media_type": "person",
            "name": "Leonardo DiCaprio"
        }"#;

        assert!(serde_json::from_str::<Candidate>(json).is_err());
    }

    #[test]
    fn test_candidate_defaults_for_sparse_entry() {
        let json = r#"{"id": 42, "media_type": "movie"}"#;

        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.title, "");
        assert_eq!(candidate.genre_ids, Vec::<u32>::new());
        assert_eq!(candidate.vote_count, 0);
        assert_eq!(candidate.release_date, "");
        assert_eq!(candidate.poster_path, None);
    }

    #[test]
    fn test_media_item_from_candidate() {
        let candidate = Candidate {
            id: 157336,
            media_type: MediaType::Movie,
            title: "Interstellar".to_string(),
            genre_ids: vec![12, 18, 878],
            vote_count: 12000,
            vote_average: 8.4,
            release_date: "2014-11-05".to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            overview: Some("Wormholes.".to_string()),
        };

        let item: MediaItem = candidate.into();
        assert_eq!(item.id, "157336");
        assert_eq!(item.tmdb_id, 157336);
        assert_eq!(item.release_year, "2014");
        assert_eq!(item.media_type, MediaType::Movie);
        assert_eq!(item.poster_path, Some("/poster.jpg".to_string()));
    }

    #[test]
    fn test_media_item_from_candidate_without_date() {
        let candidate = Candidate {
            id: 42,
            media_type: MediaType::Tv,
            title: "Undated Show".to_string(),
            genre_ids: vec![],
            vote_count: 10,
            vote_average: 5.0,
            release_date: String::new(),
            poster_path: None,
            overview: None,
        };

        let item: MediaItem = candidate.into();
        assert_eq!(item.release_year, "");
    }

    #[test]
    fn test_media_item_serializes_camel_case() {
        let item = MediaItem {
            id: "550".to_string(),
            tmdb_id: 550,
            title: "Fight Club".to_string(),
            media_type: MediaType::Movie,
            release_year: "1999".to_string(),
            poster_path: None,
            overview: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["tmdbId"], 550);
        assert_eq!(json["releaseYear"], "1999");
        assert_eq!(json["mediaType"], "movie");
    }

    #[test]
    fn test_title_details_movie_accessors() {
        let details = TitleDetails::Movie(TmdbMovieDetails {
            id: 27205,
            title: "Inception".to_string(),
            genres: vec![
                TmdbGenre {
                    id: 28,
                    name: "Action".to_string(),
                },
                TmdbGenre {
                    id: 12,
                    name: "Adventure".to_string(),
                },
            ],
            vote_average: 8.4,
            vote_count: 37000,
            release_date: "2010-07-15".to_string(),
            runtime: Some(148),
            poster_path: Some("/inception.jpg".to_string()),
            overview: None,
        });

        assert_eq!(details.media_type(), MediaType::Movie);
        assert_eq!(details.tmdb_id(), 27205);
        assert_eq!(details.title(), "Inception");
        assert_eq!(details.year(), Some(2010));
        assert!(details.genre_ids().contains(&28));
        assert!(details.genre_ids().contains(&12));
    }

    #[test]
    fn test_title_details_tv_accessors() {
        let details = TitleDetails::Tv(TmdbTvDetails {
            id: 1396,
            name: "Breaking Bad".to_string(),
            genres: vec![TmdbGenre {
                id: 18,
                name: "Drama".to_string(),
            }],
            vote_average: 8.9,
            vote_count: 9000,
            first_air_date: "2008-01-20".to_string(),
            number_of_seasons: Some(5),
            poster_path: None,
            overview: None,
        });

        assert_eq!(details.media_type(), MediaType::Tv);
        assert_eq!(details.title(), "Breaking Bad");
        assert_eq!(details.release_date(), "2008-01-20");
        assert_eq!(details.year(), Some(2008));
    }

    #[test]
    fn test_title_details_serde_tagged() {
        let details = TitleDetails::Movie(TmdbMovieDetails {
            id: 550,
            title: "Fight Club".to_string(),
            genres: vec![],
            vote_average: 8.4,
            vote_count: 26000,
            release_date: "1999-10-15".to_string(),
            runtime: Some(139),
            poster_path: None,
            overview: None,
        });

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["mediaType"], "movie");
        assert_eq!(json["id"], 550);

        let roundtrip: TitleDetails = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, details);
    }

    #[test]
    fn test_watch_providers_response_parses_region() {
        let json = r#"{
            "id": 27205,
            "results": {
                "US": {
                    "link": "https://www.themoviedb.org/movie/27205/watch",
                    "flatrate": [
                        {"provider_id": 8, "provider_name": "Netflix", "logo_path": "/netflix.jpg"}
                    ],
                    "rent": [
                        {"provider_id": 2, "provider_name": "Apple TV"}
                    ]
                }
            }
        }"#;

        let response: TmdbWatchProvidersResponse = serde_json::from_str(json).unwrap();
        let us = response.results.get("US").unwrap();
        assert_eq!(us.flatrate.len(), 1);
        assert_eq!(us.flatrate[0].provider_name, "Netflix");
    }

    #[test]
    fn test_watch_providers_region_without_flatrate() {
        let json = r#"{"results": {"FR": {"rent": [{"provider_id": 2, "provider_name": "Apple TV"}]}}}"#;

        let response: TmdbWatchProvidersResponse = serde_json::from_str(json).unwrap();
        assert!(response.results.get("FR").unwrap().flatrate.is_empty());
    }
}
