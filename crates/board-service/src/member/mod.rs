//! Member lifecycle and session issuance.

pub mod service;

pub use service::{LoginSession, MemberService, ModifyMemberData, RegisterMemberData};
