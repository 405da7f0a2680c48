use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::media::MediaType;

/// Authenticated caller identity, forwarded by the fronting gateway
#[derive(Debug, Clone, PartialEq)]
pub struct UserIdentity {
    pub id: Uuid,
    /// Lowercased email, used for membership and rating attribution
    pub email: String,
}

/// A watchlist row
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A list assembled for one caller: items, member emails, and the caller's
/// own watched flags folded in
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWithItems {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub is_owner: bool,
    pub members: Vec<String>,
    pub items: Vec<ListItemView>,
    pub created_at: DateTime<Utc>,
}

/// One saved title inside a list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemView {
    pub id: Uuid,
    pub tmdb_id: u64,
    pub media_type: MediaType,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_year: String,
    pub overview: Option<String>,
    pub added_by: Uuid,
    /// Whether the calling user has marked this item watched
    pub watched: bool,
    /// Ratings keyed by member email
    pub ratings: BTreeMap<String, i16>,
}

/// List joined through an invite link
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedList {
    pub list_id: Uuid,
    pub name: String,
}

/// Request body for creating or renaming a list
#[derive(Debug, Deserialize)]
pub struct ListNameRequest {
    pub name: String,
}

/// Request body for rating a list item; 0 clears the caller's rating
#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub rating: i16,
}

/// Request body for adding a member to a list
#[derive(Debug, Deserialize)]
pub struct MemberRequest {
    pub email: String,
}
