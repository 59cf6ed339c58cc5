//! Application state shared across all handlers.

use std::sync::Arc;

use board_auth::jwt::decoder::JwtDecoder;
use board_auth::jwt::encoder::JwtEncoder;
use board_auth::password::hasher::PasswordHasher;
use board_core::config::AppConfig;

use board_database::connection::DatabasePool;
use board_database::repositories::attachment::AttachmentRepository;
use board_database::repositories::board::BoardRepository;
use board_database::repositories::comment::CommentRepository;
use board_database::repositories::member::MemberRepository;
use board_database::repositories::post::PostRepository;

use board_service::board::BoardService;
use board_service::member::MemberService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL pool handle
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// Member repository
    pub member_repo: Arc<MemberRepository>,
    /// Board definition repository
    pub board_repo: Arc<BoardRepository>,
    /// Post repository
    pub post_repo: Arc<PostRepository>,
    /// Comment repository
    pub comment_repo: Arc<CommentRepository>,
    /// Attachment repository
    pub attachment_repo: Arc<AttachmentRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Member lifecycle service
    pub member_service: Arc<MemberService>,
    /// Board post service
    pub board_service: Arc<BoardService>,
}
