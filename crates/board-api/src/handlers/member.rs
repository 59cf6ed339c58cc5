//! Member handlers — registration and self-service profile operations.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use board_service::member::{ModifyMemberData, RegisterMemberData};

use crate::dto::request::{self, ModifyMemberRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, MemberResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthMember;
use crate::state::AppState;

/// POST /api/members
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MemberResponse>>), ApiError> {
    request::validate(&req)?;

    let member = state
        .member_service
        .register(RegisterMemberData {
            member_id: req.member_id,
            password: req.password,
            member_name: req.member_name,
            member_email: req.member_email,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(member.into())),
    ))
}

/// GET /api/members/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthMember,
) -> Result<Json<ApiResponse<MemberResponse>>, ApiError> {
    let member = state.member_service.get_profile(auth.member_no).await?;

    Ok(Json(ApiResponse::ok(member.into())))
}

/// PUT /api/members/me
pub async fn modify_profile(
    State(state): State<AppState>,
    auth: AuthMember,
    Json(req): Json<ModifyMemberRequest>,
) -> Result<Json<ApiResponse<MemberResponse>>, ApiError> {
    request::validate(&req)?;

    let member = state
        .member_service
        .modify(
            auth.member_no,
            ModifyMemberData {
                password: req.password,
                member_name: req.member_name,
                member_email: req.member_email,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(member.into())))
}

/// DELETE /api/members/me
pub async fn unsubscribe(
    State(state): State<AppState>,
    auth: AuthMember,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.member_service.unsubscribe(auth.member_no).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Unsubscribed successfully".to_string(),
    })))
}
