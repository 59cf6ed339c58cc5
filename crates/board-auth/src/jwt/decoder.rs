//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use board_core::config::AuthConfig;
use board_core::error::AppError;

use super::claims::{Claims, TokenKind};

/// One fixed message for every decode failure.
///
/// Bad signature, malformed structure, expiry, and wrong token kind are
/// deliberately indistinguishable from the outside; a caller probing with
/// forged tokens learns nothing about which check tripped.
const INVALID_TOKEN: &str = "Invalid authentication credentials";

/// Validates JWT tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_token(token, TokenKind::Access)
    }

    /// Decodes and validates a refresh token string.
    ///
    /// An access token presented here fails the same way a corrupted one
    /// does.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_token(token, TokenKind::Refresh)
    }

    fn decode_token(&self, token: &str, expected: TokenKind) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AppError::invalid_credentials(INVALID_TOKEN))?;

        let claims = token_data.claims;

        // A token is valid strictly before its expiry; a ttl of zero is
        // already expired.
        if claims.is_expired() {
            return Err(AppError::invalid_credentials(INVALID_TOKEN));
        }

        if claims.kind != expected {
            return Err(AppError::invalid_credentials(INVALID_TOKEN));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use board_core::config::AuthConfig;
    use board_core::error::ErrorKind;
    use board_entity::member::Member;
    use chrono::Utc;

    fn sample_member() -> Member {
        Member {
            member_no: 1,
            member_id: "foo".to_string(),
            password_hash: "hash".to_string(),
            member_name: "Foo".to_string(),
            member_email: "foo@example.com".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_deleted: false,
            deleted_at: None,
        }
    }

    #[test]
    fn test_pair_round_trip() {
        let config = AuthConfig::with_secret("test-secret");
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let pair = encoder.issue_login_session(&sample_member()).unwrap();

        let access = decoder.decode_access_token(&pair.access_token).unwrap();
        assert_eq!(access.member_no, 1);
        assert_eq!(access.member_name.as_deref(), Some("Foo"));

        let refresh = decoder.decode_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(refresh.member_no, 1);
        assert!(refresh.member_name.is_none());
    }

    #[test]
    fn test_zero_ttl_token_is_immediately_expired() {
        let mut config = AuthConfig::with_secret("test-secret");
        config.access_ttl_minutes = 0;
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let pair = encoder.issue_login_session(&sample_member()).unwrap();
        let err = decoder.decode_access_token(&pair.access_token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredentials);
    }

    #[test]
    fn test_wrong_secret_never_verifies() {
        let encoder = JwtEncoder::new(&AuthConfig::with_secret("secret-one"));
        let decoder = JwtDecoder::new(&AuthConfig::with_secret("secret-two"));

        let pair = encoder.issue_login_session(&sample_member()).unwrap();
        assert!(decoder.decode_access_token(&pair.access_token).is_err());
        assert!(decoder.decode_refresh_token(&pair.refresh_token).is_err());
    }

    #[test]
    fn test_access_token_rejected_as_refresh() {
        let config = AuthConfig::with_secret("test-secret");
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let pair = encoder.issue_login_session(&sample_member()).unwrap();
        assert!(decoder.decode_refresh_token(&pair.access_token).is_err());
        assert!(decoder.decode_access_token(&pair.refresh_token).is_err());
    }

    #[test]
    fn test_corrupted_token_rejected() {
        let config = AuthConfig::with_secret("test-secret");
        let decoder = JwtDecoder::new(&config);
        assert!(decoder.decode_refresh_token("not.a.token").is_err());
        assert!(decoder.decode_refresh_token("").is_err());
    }

    #[test]
    fn test_failures_are_indistinguishable() {
        let config = AuthConfig::with_secret("test-secret");
        let decoder = JwtDecoder::new(&config);
        let other = JwtEncoder::new(&AuthConfig::with_secret("other-secret"));

        let forged = other.issue_login_session(&sample_member()).unwrap();

        let malformed = decoder.decode_access_token("garbage").unwrap_err();
        let bad_signature = decoder
            .decode_access_token(&forged.access_token)
            .unwrap_err();

        assert_eq!(malformed.message, bad_signature.message);
        assert_eq!(malformed.kind, bad_signature.kind);
    }
}
