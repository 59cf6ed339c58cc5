//! # board-service
//!
//! Business logic for Maru Board. `MemberService` owns the member and
//! session lifecycle (register, login, token refresh, modify,
//! unsubscribe); `BoardService` owns board post CRUD with the shared
//! ownership policy.

pub mod board;
pub mod context;
pub mod member;

pub use board::BoardService;
pub use context::RequestContext;
pub use member::MemberService;
