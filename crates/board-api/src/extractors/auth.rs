//! Bearer-token extractors — pull the JWT from the Authorization header,
//! validate it, and inject a `RequestContext`.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use board_core::error::AppError;
use board_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated member context, required.
///
/// Rejects the request with 401 when the header is missing, malformed,
/// or the token does not verify as a live access token.
#[derive(Debug, Clone)]
pub struct AuthMember(pub RequestContext);

impl AuthMember {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthMember {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Optional member context for routes open to anonymous callers.
///
/// A missing Authorization header yields `MaybeMember(None)`; a header
/// that is present but invalid is still rejected with 401 so a stale
/// token never silently downgrades to anonymous.
#[derive(Debug, Clone)]
pub struct MaybeMember(pub Option<RequestContext>);

impl MaybeMember {
    /// The acting member's number, when authenticated.
    pub fn member_no(&self) -> Option<i64> {
        self.0.as_ref().map(|ctx| ctx.member_no)
    }
}

fn bearer_token(parts: &Parts) -> Result<Option<&str>, AppError> {
    let Some(header) = parts.headers.get("authorization") else {
        return Ok(None);
    };

    let value = header
        .to_str()
        .map_err(|_| AppError::invalid_credentials("Invalid Authorization header"))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::invalid_credentials("Invalid Authorization header format"))?;

    Ok(Some(token))
}

impl FromRequestParts<AppState> for AuthMember {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?
            .ok_or_else(|| AppError::invalid_credentials("Missing Authorization header"))?;

        let claims = state.jwt_decoder.decode_access_token(token)?;

        Ok(AuthMember(RequestContext::from_claims(claims)))
    }
}

impl FromRequestParts<AppState> for MaybeMember {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match bearer_token(parts)? {
            None => Ok(MaybeMember(None)),
            Some(token) => {
                let claims = state.jwt_decoder.decode_access_token(token)?;
                Ok(MaybeMember(Some(RequestContext::from_claims(claims))))
            }
        }
    }
}
