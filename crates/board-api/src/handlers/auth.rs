//! Auth handlers — login and token refresh.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{self, LoginRequest, RefreshRequest};
use crate::dto::response::{ApiResponse, LoginResponse};
use crate::error::ApiError;
use crate::state::AppState;

use board_service::member::LoginSession;

fn login_response(session: LoginSession) -> LoginResponse {
    LoginResponse {
        access_token: session.tokens.access_token,
        refresh_token: session.tokens.refresh_token,
        access_expires_at: session.tokens.access_expires_at,
        refresh_expires_at: session.tokens.refresh_expires_at,
        member: session.member.into(),
    }
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    request::validate(&req)?;

    let session = state
        .member_service
        .login(&req.member_id, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(login_response(session))))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let session = state.member_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(login_response(session))))
}
