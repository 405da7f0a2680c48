use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        JoinedList, List, ListItemView, ListNameRequest, ListWithItems, MediaItem, MemberRequest,
        RatingRequest, UserIdentity,
    },
    state::AppState,
};

/// Handler for the caller's watchlists, owned and shared
pub async fn index(
    State(state): State<AppState>,
    user: UserIdentity,
) -> AppResult<Json<Vec<ListWithItems>>> {
    let lists = state.store.lists_for_user(&user).await?;
    Ok(Json(lists))
}

/// Handler for creating a watchlist
pub async fn create(
    State(state): State<AppState>,
    user: UserIdentity,
    Json(body): Json<ListNameRequest>,
) -> AppResult<(StatusCode, Json<List>)> {
    let list = state.store.create_list(&user, &body.name).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// Handler for renaming a watchlist (owner only)
pub async fn rename(
    State(state): State<AppState>,
    user: UserIdentity,
    Path(list_id): Path<Uuid>,
    Json(body): Json<ListNameRequest>,
) -> AppResult<Json<List>> {
    let list = state.store.rename_list(&user, list_id, &body.name).await?;
    Ok(Json(list))
}

/// Handler for deleting a watchlist
///
/// Owners delete the list outright; members leave it instead.
pub async fn remove(
    State(state): State<AppState>,
    user: UserIdentity,
    Path(list_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.store.delete_list(&user, list_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for saving a title into a list
pub async fn add_item(
    State(state): State<AppState>,
    user: UserIdentity,
    Path(list_id): Path<Uuid>,
    Json(item): Json<MediaItem>,
) -> AppResult<(StatusCode, Json<ListItemView>)> {
    let view = state.store.add_item(&user, list_id, &item).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Handler for removing a saved title (owner or whoever added it)
pub async fn remove_item(
    State(state): State<AppState>,
    user: UserIdentity,
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    state.store.remove_item(&user, list_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for toggling the caller's watched mark on an item
pub async fn toggle_watched(
    State(state): State<AppState>,
    user: UserIdentity,
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Value>> {
    let watched = state.store.toggle_watched(&user, list_id, item_id).await?;
    Ok(Json(json!({ "watched": watched })))
}

/// Handler for rating an item; a rating of 0 clears the caller's rating
pub async fn rate_item(
    State(state): State<AppState>,
    user: UserIdentity,
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<RatingRequest>,
) -> AppResult<StatusCode> {
    state
        .store
        .rate_item(&user, list_id, item_id, body.rating)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for adding a member to a list by email (owner only)
pub async fn add_member(
    State(state): State<AppState>,
    user: UserIdentity,
    Path(list_id): Path<Uuid>,
    Json(body): Json<MemberRequest>,
) -> AppResult<StatusCode> {
    state.store.add_member(&user, list_id, &body.email).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for removing a member from a list (owner only)
pub async fn remove_member(
    State(state): State<AppState>,
    user: UserIdentity,
    Path((list_id, email)): Path<(Uuid, String)>,
) -> AppResult<StatusCode> {
    state.store.remove_member(&user, list_id, &email).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for creating (or fetching the existing) invite token
pub async fn create_invite(
    State(state): State<AppState>,
    user: UserIdentity,
    Path(list_id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    let token = state.store.invite_token(&user, list_id).await?;
    Ok(Json(json!({ "token": token })))
}

/// Handler for revoking a list's invite token
pub async fn revoke_invite(
    State(state): State<AppState>,
    user: UserIdentity,
    Path(list_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.store.revoke_invite(&user, list_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for joining a list through an invite link
pub async fn join_via_invite(
    State(state): State<AppState>,
    user: UserIdentity,
    Path(token): Path<String>,
) -> AppResult<Json<JoinedList>> {
    let joined = state.store.join_via_invite(&user, &token).await?;
    Ok(Json(joined))
}
