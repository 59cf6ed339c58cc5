//! Board and post handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use board_core::types::pagination::{PageRequest, PageResponse};
use board_core::types::sorting::SortDirection;
use board_entity::post::PostSortField;
use board_service::board::{CreatePostData, PostListQuery, UpdatePostData};

use crate::dto::request::{self, CreatePostRequest, PostListParams, UpdatePostRequest};
use crate::dto::response::{
    ApiResponse, BoardResponse, MessageResponse, PostDetailResponse, PostResponse,
};
use crate::error::ApiError;
use crate::extractors::{AuthMember, MaybeMember};
use crate::state::AppState;

fn list_query(params: PostListParams) -> Result<PostListQuery, ApiError> {
    let page = PageRequest::new(params.page.unwrap_or(1), params.page_size.unwrap_or(20));

    let sort = match params.sort.as_deref() {
        Some(name) => name.parse::<PostSortField>()?,
        None => PostSortField::default(),
    };

    let direction = match params.order.as_deref() {
        Some(name) => name.parse::<SortDirection>()?,
        None => SortDirection::default(),
    };

    Ok(PostListQuery {
        page,
        sort,
        direction,
    })
}

/// GET /api/boards/{board_id}
pub async fn get_board(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Json<ApiResponse<BoardResponse>>, ApiError> {
    let board = state.board_service.get_board(&board_id).await?;

    Ok(Json(ApiResponse::ok(board.into())))
}

/// GET /api/boards/{board_id}/posts
pub async fn list_posts(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
    Query(params): Query<PostListParams>,
) -> Result<Json<ApiResponse<PageResponse<PostResponse>>>, ApiError> {
    let query = list_query(params)?;

    let page = state.board_service.list_posts(&board_id, &query).await?;

    Ok(Json(ApiResponse::ok(page.map(PostResponse::from))))
}

/// POST /api/boards/{board_id}/posts
pub async fn create_post(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
    member: MaybeMember,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PostResponse>>), ApiError> {
    request::validate(&req)?;

    let post = state
        .board_service
        .create_post(
            &board_id,
            member.member_no(),
            CreatePostData {
                title: req.title,
                contents: req.contents,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(post.into()))))
}

/// GET /api/posts/{post_no}
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_no): Path<i64>,
) -> Result<Json<ApiResponse<PostDetailResponse>>, ApiError> {
    let detail = state.board_service.get_post(post_no).await?;

    Ok(Json(ApiResponse::ok(detail.into())))
}

/// PUT /api/posts/{post_no}
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_no): Path<i64>,
    member: MaybeMember,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    request::validate(&req)?;

    let post = state
        .board_service
        .update_post(
            member.member_no(),
            post_no,
            UpdatePostData {
                title: req.title,
                contents: req.contents,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(post.into())))
}

/// DELETE /api/posts/{post_no}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_no): Path<i64>,
    member: MaybeMember,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .board_service
        .delete_post(member.member_no(), post_no)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Post deleted".to_string(),
    })))
}
