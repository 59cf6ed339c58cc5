//! Route definitions for the Maru Board HTTP API.
//!
//! All domain routes are mounted under `/api`; the health probe sits at
//! the root. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(member_routes())
        .merge(board_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: login, refresh
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
}

/// Member registration and self-service endpoints
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", post(handlers::member::register))
        .route("/members/me", get(handlers::member::get_profile))
        .route("/members/me", put(handlers::member::modify_profile))
        .route("/members/me", delete(handlers::member::unsubscribe))
}

/// Board lookup and post CRUD
fn board_routes() -> Router<AppState> {
    Router::new()
        .route("/boards/{board_id}", get(handlers::board::get_board))
        .route(
            "/boards/{board_id}/posts",
            get(handlers::board::list_posts),
        )
        .route(
            "/boards/{board_id}/posts",
            post(handlers::board::create_post),
        )
        .route("/posts/{post_no}", get(handlers::board::get_post))
        .route("/posts/{post_no}", put(handlers::board::update_post))
        .route("/posts/{post_no}", delete(handlers::board::delete_post))
}
