//! Post repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the add/list API over the `posts` table.
//! - Eager-load the owning blog on every list query so display code
//!   never needs a second round trip for the blog name.
//!
//! # Invariants
//! - Write paths must call `NewPost::validate()` before SQL mutations.
//! - Referential integrity is enforced by the `posts.blog_id` foreign
//!   key; a dangling id surfaces as a constraint error.

use crate::model::blog::BlogId;
use crate::model::post::{NewPost, PostId, PostWithBlog};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const POST_SELECT_SQL: &str = "SELECT
    p.id,
    p.blog_id,
    b.name AS blog_name,
    p.title,
    p.content
FROM posts p
JOIN blogs b ON b.id = p.blog_id";

/// Repository interface for post operations.
pub trait PostRepository {
    /// Persists a new post referencing an existing blog and returns
    /// the storage-assigned id.
    fn add_post(&self, draft: &NewPost) -> RepoResult<PostId>;
    /// Lists every post with its owning blog, ascending by post id.
    fn list_all_posts(&self) -> RepoResult<Vec<PostWithBlog>>;
    /// Lists one blog's posts with the owning blog, ascending by post
    /// id. Returns an empty list for an unknown blog id.
    fn list_posts_for_blog(&self, blog_id: BlogId) -> RepoResult<Vec<PostWithBlog>>;
}

/// SQLite-backed post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn add_post(&self, draft: &NewPost) -> RepoResult<PostId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO posts (blog_id, title, content) VALUES (?1, ?2, ?3);",
            params![draft.blog_id, draft.title.as_str(), draft.content.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_all_posts(&self) -> RepoResult<Vec<PostWithBlog>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} ORDER BY p.id ASC;"))?;
        let mut rows = stmt.query([])?;
        collect_posts(&mut rows)
    }

    fn list_posts_for_blog(&self, blog_id: BlogId) -> RepoResult<Vec<PostWithBlog>> {
        let mut stmt = self.conn.prepare(&format!(
            "{POST_SELECT_SQL} WHERE p.blog_id = ?1 ORDER BY p.id ASC;"
        ))?;
        let mut rows = stmt.query([blog_id])?;
        collect_posts(&mut rows)
    }
}

fn collect_posts(rows: &mut rusqlite::Rows<'_>) -> RepoResult<Vec<PostWithBlog>> {
    let mut posts = Vec::new();
    while let Some(row) = rows.next()? {
        posts.push(parse_post_row(row)?);
    }
    Ok(posts)
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<PostWithBlog> {
    let post = PostWithBlog {
        id: row.get("id")?,
        blog_id: row.get("blog_id")?,
        blog_name: row.get("blog_name")?,
        title: row.get("title")?,
        content: row.get("content")?,
    };
    // Read paths reject invalid persisted state instead of masking it.
    if post.title.is_empty() {
        return Err(RepoError::InvalidData(format!(
            "empty title in posts.title for id {}",
            post.id
        )));
    }
    Ok(post)
}
