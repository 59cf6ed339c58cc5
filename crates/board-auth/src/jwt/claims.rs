//! JWT claims structure used in access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims payload embedded in every token.
///
/// Access tokens carry the full identity (`member_name` and
/// `member_email` present); refresh tokens carry only the member number
/// and identifier. The `kind` tag is what lets the refresh endpoint
/// reject an access token outright instead of silently accepting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The member's generated number.
    pub member_no: i64,
    /// The member's login identifier.
    pub member_id: String,
    /// Display name; present in access tokens only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_name: Option<String>,
    /// Email address; present in access tokens only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_email: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token kind: access or refresh.
    pub kind: TokenKind,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Short-lived access token for API requests.
    Access,
    /// Long-lived refresh token for obtaining new token pairs.
    Refresh,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_claims_omit_identity_extras() {
        let claims = Claims {
            member_no: 1,
            member_id: "foo".to_string(),
            member_name: None,
            member_email: None,
            iat: 0,
            exp: 0,
            kind: TokenKind::Refresh,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("member_name").is_none());
        assert!(json.get("member_email").is_none());
        assert_eq!(json.get("kind").unwrap(), "refresh");
    }

    #[test]
    fn test_expiry_check() {
        let past = Claims {
            member_no: 1,
            member_id: "foo".to_string(),
            member_name: None,
            member_email: None,
            iat: 0,
            exp: Utc::now().timestamp() - 10,
            kind: TokenKind::Access,
        };
        assert!(past.is_expired());
    }
}
