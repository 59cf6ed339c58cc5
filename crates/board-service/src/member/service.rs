//! Member lifecycle — registration, login, token refresh, profile
//! modification, and unsubscription.

use std::sync::Arc;

use tracing::info;

use board_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use board_auth::password::PasswordHasher;
use board_core::error::AppError;
use board_database::repositories::MemberRepository;
use board_entity::member::{CreateMember, Member, UpdateMember};

/// Handles the member and session lifecycle.
#[derive(Debug, Clone)]
pub struct MemberService {
    /// Member repository.
    member_repo: Arc<MemberRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder (session issuer).
    encoder: Arc<JwtEncoder>,
    /// Token decoder for the refresh flow.
    decoder: Arc<JwtDecoder>,
    /// Minimum accepted password length.
    password_min_length: usize,
}

/// Data for registering a new member.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterMemberData {
    /// Desired login identifier.
    pub member_id: String,
    /// Plaintext password.
    pub password: String,
    /// Display name.
    pub member_name: String,
    /// Email address.
    pub member_email: String,
}

/// Data for modifying a member's own profile. `None` fields are no-ops.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ModifyMemberData {
    /// New plaintext password.
    pub password: Option<String>,
    /// New display name.
    pub member_name: Option<String>,
    /// New email address.
    pub member_email: Option<String>,
}

/// A successful login or refresh: the member identity plus a fresh
/// access + refresh token pair.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginSession {
    /// The authenticated member.
    pub member: Member,
    /// Newly issued tokens.
    pub tokens: TokenPair,
}

impl MemberService {
    /// Creates a new member service.
    pub fn new(
        member_repo: Arc<MemberRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        password_min_length: usize,
    ) -> Self {
        Self {
            member_repo,
            hasher,
            encoder,
            decoder,
            password_min_length,
        }
    }

    /// Registers a new member.
    ///
    /// Fails with `AlreadyExists` when a live member already holds the
    /// identifier. The pre-check keeps the common error message friendly;
    /// the partial unique index is the real guarantee under races.
    pub async fn register(&self, data: RegisterMemberData) -> Result<Member, AppError> {
        self.check_password_length(&data.password)?;

        if self
            .member_repo
            .find_live_by_member_id(&data.member_id)
            .await?
            .is_some()
        {
            return Err(AppError::already_exists(format!(
                "Member identifier '{}' is already in use",
                data.member_id
            )));
        }

        let password_hash = self.hasher.hash_password(&data.password)?;

        let member = self
            .member_repo
            .create(&CreateMember {
                member_id: data.member_id,
                password_hash,
                member_name: data.member_name,
                member_email: data.member_email,
            })
            .await?;

        info!(member_no = member.member_no, member_id = %member.member_id, "Member registered");

        Ok(member)
    }

    /// Authenticates a member and issues a token pair.
    ///
    /// A soft-deleted member fails with `NotFound` exactly like an
    /// unknown identifier; a wrong password is `InvalidCredentials`.
    pub async fn login(&self, member_id: &str, password: &str) -> Result<LoginSession, AppError> {
        let member = self
            .member_repo
            .find_live_by_member_id(member_id)
            .await?
            .ok_or_else(|| AppError::not_found("No member matches that identifier"))?;

        let valid = self
            .hasher
            .verify_password(password, &member.password_hash)?;
        if !valid {
            return Err(AppError::invalid_credentials("Password does not match"));
        }

        let tokens = self.encoder.issue_login_session(&member)?;

        info!(member_no = member.member_no, "Member logged in");

        Ok(LoginSession { member, tokens })
    }

    /// Exchanges a refresh token for a brand-new access + refresh pair.
    ///
    /// Decoding fails closed: any signature, shape, expiry, or kind
    /// problem is `InvalidCredentials`. The member is re-fetched so a
    /// member deleted since issuance gets `NotFound`.
    ///
    /// Refresh tokens are not rotated or revoked on use; until its expiry
    /// a captured refresh token can be replayed. Inherited weakness,
    /// kept deliberately visible.
    pub async fn refresh(&self, refresh_token: &str) -> Result<LoginSession, AppError> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let member = self
            .member_repo
            .find_live_by_no(claims.member_no)
            .await?
            .ok_or_else(|| AppError::not_found("No member matches that identifier"))?;

        let tokens = self.encoder.issue_login_session(&member)?;

        info!(member_no = member.member_no, "Session refreshed");

        Ok(LoginSession { member, tokens })
    }

    /// Fetches the acting member's live profile.
    pub async fn get_profile(&self, member_no: i64) -> Result<Member, AppError> {
        self.member_repo
            .find_live_by_no(member_no)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found"))
    }

    /// Applies a partial profile update; a supplied password is re-hashed
    /// before it reaches the store.
    pub async fn modify(
        &self,
        member_no: i64,
        data: ModifyMemberData,
    ) -> Result<Member, AppError> {
        let password_hash = match data.password {
            Some(ref password) => {
                self.check_password_length(password)?;
                Some(self.hasher.hash_password(password)?)
            }
            None => None,
        };

        let update = UpdateMember {
            password_hash,
            member_name: data.member_name,
            member_email: data.member_email,
        };

        if update.is_empty() {
            // Nothing supplied; return the current row untouched.
            return self.get_profile(member_no).await;
        }

        let member = self.member_repo.update(member_no, &update).await?;

        info!(member_no, "Member profile updated");

        Ok(member)
    }

    /// Soft-deletes the acting member. Their identifier stops resolving
    /// for login and refresh immediately; the row itself remains.
    pub async fn unsubscribe(&self, member_no: i64) -> Result<(), AppError> {
        self.member_repo.soft_delete(member_no).await?;

        info!(member_no, "Member unsubscribed");

        Ok(())
    }

    fn check_password_length(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.password_min_length
            )));
        }
        Ok(())
    }
}
