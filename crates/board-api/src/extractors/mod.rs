//! Axum extractors.

pub mod auth;

pub use auth::{AuthMember, MaybeMember};
