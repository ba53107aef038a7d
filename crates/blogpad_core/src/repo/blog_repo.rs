//! Blog repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the add/list API over the `blogs` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `NewBlog::validate()` before SQL mutations.
//! - Listings are fully ordered; callers pick the ordering column.

use crate::model::blog::{Blog, BlogId, NewBlog};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{Connection, Row};

/// Ordering column for blog listings.
///
/// `Name` backs the display listing; `Id` backs the numbered selection
/// menus, which must be stable across inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogOrder {
    Name,
    Id,
}

/// Repository interface for blog operations.
pub trait BlogRepository {
    /// Persists a new blog and returns the storage-assigned id.
    fn add_blog(&self, draft: &NewBlog) -> RepoResult<BlogId>;
    /// Lists every blog, ascending by the requested column.
    fn list_blogs(&self, order: BlogOrder) -> RepoResult<Vec<Blog>>;
}

/// SQLite-backed blog repository.
pub struct SqliteBlogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBlogRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BlogRepository for SqliteBlogRepository<'_> {
    fn add_blog(&self, draft: &NewBlog) -> RepoResult<BlogId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO blogs (name) VALUES (?1);",
            [draft.name.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_blogs(&self, order: BlogOrder) -> RepoResult<Vec<Blog>> {
        let sql = match order {
            BlogOrder::Name => "SELECT id, name FROM blogs ORDER BY name ASC, id ASC",
            BlogOrder::Id => "SELECT id, name FROM blogs ORDER BY id ASC",
        };

        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut blogs = Vec::new();

        while let Some(row) = rows.next()? {
            blogs.push(parse_blog_row(row)?);
        }

        Ok(blogs)
    }
}

fn parse_blog_row(row: &Row<'_>) -> RepoResult<Blog> {
    let blog = Blog {
        id: row.get("id")?,
        name: row.get("name")?,
    };
    // Read paths reject invalid persisted state instead of masking it.
    if blog.name.is_empty() {
        return Err(RepoError::InvalidData(format!(
            "empty name in blogs.name for id {}",
            blog.id
        )));
    }
    Ok(blog)
}
