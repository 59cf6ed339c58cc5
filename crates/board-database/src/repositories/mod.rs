//! Concrete repository implementations.

pub mod attachment;
pub mod board;
pub mod comment;
pub mod member;
pub mod post;

pub use attachment::AttachmentRepository;
pub use board::BoardRepository;
pub use comment::CommentRepository;
pub use member::MemberRepository;
pub use post::PostRepository;
