//! Post domain model.
//!
//! # Invariants
//! - `blog_id` references an existing blog, set at creation and
//!   immutable thereafter.
//! - A title is required and non-empty; content is free text and may
//!   legitimately be empty.

use crate::model::blog::BlogId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a persisted post, assigned on insert.
pub type PostId = i64;

/// Persisted post row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Storage-assigned rowid.
    pub id: PostId,
    /// Owning blog, required.
    pub blog_id: BlogId,
    /// Required and non-empty.
    pub title: String,
    /// Free text, empty allowed.
    pub content: String,
}

/// Post joined with its owning blog's name.
///
/// Produced by the eager-loading list queries so display code never
/// needs a second round trip for the blog name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithBlog {
    pub id: PostId,
    pub blog_id: BlogId,
    pub blog_name: String,
    pub title: String,
    pub content: String,
}

/// Insert draft for a post not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub blog_id: BlogId,
    pub title: String,
    pub content: String,
}

/// Validation failure for post write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostValidationError {
    EmptyTitle,
    InvalidBlogId(BlogId),
}

impl Display for PostValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "post title cannot be empty"),
            Self::InvalidBlogId(id) => write!(f, "invalid owning blog id: {id}"),
        }
    }
}

impl Error for PostValidationError {}

impl NewPost {
    /// Creates an insert draft owned by the given blog.
    pub fn new(blog_id: BlogId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            blog_id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Checks draft invariants before persistence.
    ///
    /// Content is intentionally not checked: an empty body is valid.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is the empty string.
    /// - `InvalidBlogId` when the owning id cannot be a rowid.
    pub fn validate(&self) -> Result<(), PostValidationError> {
        if self.title.is_empty() {
            return Err(PostValidationError::EmptyTitle);
        }
        if self.blog_id < 1 {
            return Err(PostValidationError::InvalidBlogId(self.blog_id));
        }
        Ok(())
    }
}
