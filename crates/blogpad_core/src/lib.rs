//! Core domain logic for Blogpad.
//! This crate is the single source of truth for blog/post invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging};
pub use model::blog::{Blog, BlogId, BlogValidationError, NewBlog};
pub use model::post::{NewPost, Post, PostId, PostValidationError, PostWithBlog};
pub use repo::blog_repo::{BlogOrder, BlogRepository, SqliteBlogRepository};
pub use repo::post_repo::{PostRepository, SqlitePostRepository};
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
