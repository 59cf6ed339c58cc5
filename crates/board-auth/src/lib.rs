//! # board-auth
//!
//! Credential management for Maru Board: Argon2id password hashing and
//! HS256 session tokens (access + refresh pairs).
//!
//! ## Modules
//!
//! - `password` — password hashing and verification
//! - `jwt` — token claims, issuance, and validation
//!
//! Tokens are stateless: the server keeps no session rows and no
//! revocation list. A refresh token stays valid until its expiry even
//! after use — a known replay weakness inherited from the original
//! design, documented rather than silently fixed.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenKind, TokenPair};
pub use password::PasswordHasher;
