//! Member entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered member.
///
/// `member_id` is the human-readable login identifier; `member_no` is the
/// generated primary key that tokens and ownership columns refer to.
/// Uniqueness of `member_id` applies to live rows only: once a member is
/// soft-deleted its identifier becomes reusable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// Generated member number (primary key).
    pub member_no: i64,
    /// Unique login identifier.
    pub member_id: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name.
    pub member_name: String,
    /// Email address.
    pub member_email: String,
    /// When the member registered.
    pub created_at: DateTime<Utc>,
    /// When the member row was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// When the member was soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Member {
    /// A member counts as live until it is soft-deleted.
    pub fn is_live(&self) -> bool {
        !self.is_deleted
    }
}

/// Data required to register a new member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMember {
    /// Desired login identifier.
    pub member_id: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Display name.
    pub member_name: String,
    /// Email address.
    pub member_email: String,
}

/// Partial update of an existing member.
///
/// `None` fields are left untouched; there is no way to blank a column
/// through this struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMember {
    /// New password hash (already hashed by the service layer).
    pub password_hash: Option<String>,
    /// New display name.
    pub member_name: Option<String>,
    /// New email address.
    pub member_email: Option<String>,
}

impl UpdateMember {
    /// True when no field is supplied; the repository skips the round trip.
    pub fn is_empty(&self) -> bool {
        self.password_hash.is_none() && self.member_name.is_none() && self.member_email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_member() -> Member {
        Member {
            member_no: 1,
            member_id: "foo".to_string(),
            password_hash: "$argon2id$...".to_string(),
            member_name: "Foo".to_string(),
            member_email: "foo@example.com".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_deleted: false,
            deleted_at: None,
        }
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_value(sample_member()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json.get("member_id").unwrap(), "foo");
    }

    #[test]
    fn test_live_flag() {
        let mut member = sample_member();
        assert!(member.is_live());
        member.is_deleted = true;
        assert!(!member.is_live());
    }

    #[test]
    fn test_update_empty_detection() {
        assert!(UpdateMember::default().is_empty());
        let update = UpdateMember {
            member_name: Some("Bar".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
