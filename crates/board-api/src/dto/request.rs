//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use board_core::error::AppError;

/// Validates a request body and folds the per-field errors into one
/// `Validation` error message.
pub fn validate<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

/// Member registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired login identifier.
    #[validate(length(min = 1, max = 30, message = "Member identifier must be 1-30 characters"))]
    pub member_id: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, max = 20, message = "Member name must be 1-20 characters"))]
    pub member_name: String,
    /// Email address.
    #[validate(
        email(message = "Invalid email address"),
        length(max = 50, message = "Email must be at most 50 characters")
    )]
    pub member_email: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login identifier.
    #[validate(length(min = 1, message = "Member identifier is required"))]
    pub member_id: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Partial member profile update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ModifyMemberRequest {
    /// New plaintext password.
    pub password: Option<String>,
    /// New display name.
    #[validate(length(min = 1, max = 20, message = "Member name must be 1-20 characters"))]
    pub member_name: Option<String>,
    /// New email address.
    #[validate(
        email(message = "Invalid email address"),
        length(max = 50, message = "Email must be at most 50 characters")
    )]
    pub member_email: Option<String>,
}

/// Post creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Post title.
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    /// Post body; may contain HTML.
    pub contents: Option<String>,
}

/// Partial post update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    /// New title.
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,
    /// New body.
    pub contents: Option<String>,
}

/// Query-string parameters for listing posts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListParams {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
    /// Sort column name, from the allow-list.
    pub sort: Option<String>,
    /// Sort direction, `asc` or `desc`.
    pub order: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_bad_email() {
        let req = RegisterRequest {
            member_id: "jdoe".to_string(),
            password: "correct horse".to_string(),
            member_name: "Jane Doe".to_string(),
            member_email: "not-an-email".to_string(),
        };
        assert!(validate(&req).is_err());
    }

    #[test]
    fn register_rejects_overlong_identifier() {
        let req = RegisterRequest {
            member_id: "x".repeat(31),
            password: "correct horse".to_string(),
            member_name: "Jane Doe".to_string(),
            member_email: "jane@example.com".to_string(),
        };
        assert!(validate(&req).is_err());
    }

    #[test]
    fn modify_accepts_all_fields_absent() {
        let req = ModifyMemberRequest::default();
        assert!(validate(&req).is_ok());
    }
}
