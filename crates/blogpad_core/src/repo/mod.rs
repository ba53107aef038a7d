//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from handler orchestration.
//!
//! # Invariants
//! - Repository writes must enforce draft `validate()` before
//!   persistence.
//! - Repository APIs surface semantic validation errors in addition to
//!   DB transport errors.

use crate::db::DbError;
use crate::model::blog::BlogValidationError;
use crate::model::post::PostValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod blog_repo;
pub mod post_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for blog/post persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    BlogValidation(BlogValidationError),
    PostValidation(PostValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlogValidation(err) => write!(f, "{err}"),
            Self::PostValidation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BlogValidation(err) => Some(err),
            Self::PostValidation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<BlogValidationError> for RepoError {
    fn from(value: BlogValidationError) -> Self {
        Self::BlogValidation(value)
    }
}

impl From<PostValidationError> for RepoError {
    fn from(value: PostValidationError) -> Self {
        Self::PostValidation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
