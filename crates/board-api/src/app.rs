//! Application builder — wires repositories, services, and the router
//! into a running Axum server.

use std::sync::Arc;

use axum::Router;

use board_core::config::AppConfig;
use board_core::error::AppError;

use board_database::connection::DatabasePool;
use board_database::repositories::attachment::AttachmentRepository;
use board_database::repositories::board::BoardRepository;
use board_database::repositories::comment::CommentRepository;
use board_database::repositories::member::MemberRepository;
use board_database::repositories::post::PostRepository;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application from configuration and a pool.
pub fn build_app(config: AppConfig, db: DatabasePool) -> Router {
    let config = Arc::new(config);

    let member_repo = Arc::new(MemberRepository::new(db.pool().clone()));
    let board_repo = Arc::new(BoardRepository::new(db.pool().clone()));
    let post_repo = Arc::new(PostRepository::new(db.pool().clone()));
    let comment_repo = Arc::new(CommentRepository::new(db.pool().clone()));
    let attachment_repo = Arc::new(AttachmentRepository::new(db.pool().clone()));

    let password_hasher = Arc::new(board_auth::password::hasher::PasswordHasher::new());
    let jwt_encoder = Arc::new(board_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(board_auth::jwt::decoder::JwtDecoder::new(&config.auth));

    let member_service = Arc::new(board_service::member::MemberService::new(
        Arc::clone(&member_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        config.auth.password_min_length,
    ));
    let board_service = Arc::new(board_service::board::BoardService::new(
        Arc::clone(&board_repo),
        Arc::clone(&post_repo),
        Arc::clone(&comment_repo),
        Arc::clone(&attachment_repo),
    ));

    let state = AppState {
        config,
        db,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        member_repo,
        board_repo,
        post_repo,
        comment_repo,
        attachment_repo,
        member_service,
        board_service,
    };

    build_router(state)
}

/// Runs the HTTP server until Ctrl+C, then drains the pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app = build_app(config, db.clone());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
}
