//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod block_repo;
pub mod comment_repo;
pub mod notification_repo;
pub mod post_repo;
pub mod sub_repo;
pub mod user_repo;
pub mod vote_repo;

pub use block_repo::BlockRepo;
pub use comment_repo::CommentRepo;
pub use notification_repo::NotificationRepo;
pub use post_repo::PostRepo;
pub use sub_repo::SubRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
