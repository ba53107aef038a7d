//! Blog domain model.
//!
//! # Invariants
//! - `id` is the SQLite rowid and is never reused for another blog.
//! - A blog name is required and non-empty.
//! - The owned post collection is not a field here; it is fetched
//!   explicitly through `PostRepository::list_posts_for_blog`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a persisted blog, assigned on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BlogId = i64;

/// Persisted blog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    /// Storage-assigned rowid.
    pub id: BlogId,
    /// Display name, required and non-empty.
    pub name: String,
}

/// Insert draft for a blog not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlog {
    pub name: String,
}

/// Validation failure for blog write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogValidationError {
    EmptyName,
}

impl Display for BlogValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "blog name cannot be empty"),
        }
    }
}

impl Error for BlogValidationError {}

impl NewBlog {
    /// Creates an insert draft with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Checks draft invariants before persistence.
    ///
    /// # Errors
    /// - `EmptyName` when the name is the empty string.
    pub fn validate(&self) -> Result<(), BlogValidationError> {
        if self.name.is_empty() {
            return Err(BlogValidationError::EmptyName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BlogValidationError, NewBlog};

    #[test]
    fn validate_accepts_non_empty_name() {
        assert!(NewBlog::new("Tech").validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let err = NewBlog::new("").validate().unwrap_err();
        assert_eq!(err, BlogValidationError::EmptyName);
    }

    #[test]
    fn whitespace_name_counts_as_non_empty() {
        // Matches the input boundary: only the empty string is rejected.
        assert!(NewBlog::new(" ").validate().is_ok());
    }
}
