//! Request context carrying the authenticated member identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use board_auth::jwt::Claims;

/// Context for the current authenticated request.
///
/// Built from validated access-token claims by the HTTP extractor and
/// passed into service methods so that every operation knows *who* is
/// acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting member's number.
    pub member_no: i64,
    /// The acting member's login identifier.
    pub member_id: String,
    /// Display name carried in the access token.
    pub member_name: Option<String>,
    /// Email carried in the access token.
    pub member_email: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context from validated access-token claims.
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            member_no: claims.member_no,
            member_id: claims.member_id,
            member_name: claims.member_name,
            member_email: claims.member_email,
            request_time: Utc::now(),
        }
    }
}
