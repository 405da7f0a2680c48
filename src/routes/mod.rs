use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};
use crate::state::AppState;

pub mod lists;
pub mod titles;

/// Creates the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/search", get(titles::search))
        .route("/titles/:media_type/:id", get(titles::details))
        .route(
            "/titles/:media_type/:id/recommendations",
            get(titles::recommend),
        )
        .route(
            "/titles/:media_type/:id/watch-providers",
            get(titles::watch_providers),
        )
        // Watchlists
        .route("/lists", get(lists::index).post(lists::create))
        .route("/lists/:id", put(lists::rename).delete(lists::remove))
        .route("/lists/:id/items", post(lists::add_item))
        .route("/lists/:id/items/:item_id", delete(lists::remove_item))
        .route(
            "/lists/:id/items/:item_id/watched",
            post(lists::toggle_watched),
        )
        .route("/lists/:id/items/:item_id/rating", put(lists::rate_item))
        // Sharing
        .route("/lists/:id/members", post(lists::add_member))
        .route("/lists/:id/members/:email", delete(lists::remove_member))
        .route(
            "/lists/:id/invite",
            post(lists::create_invite).delete(lists::revoke_invite),
        )
        .route("/invites/:token/join", post(lists::join_via_invite))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
