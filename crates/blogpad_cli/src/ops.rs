//! The four menu operation handlers.
//!
//! # Responsibility
//! - Orchestrate one console interaction with the repository layer
//!   per operation.
//!
//! # Invariants
//! - Validation rejections log at error level and return `Ok(())`
//!   without touching storage; only console I/O and storage failures
//!   surface as `OpError`.
//! - Numbered selection menus are 1-based over blogs ordered by id.

use crate::console::Console;
use blogpad_core::db::DbError;
use blogpad_core::{
    Blog, BlogOrder, BlogRepository, NewBlog, NewPost, PostRepository, PostWithBlog, RepoError,
};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub type OpResult = Result<(), OpError>;

/// Failure of a dispatched operation: console I/O or storage.
#[derive(Debug)]
pub enum OpError {
    Io(io::Error),
    Db(DbError),
    Repo(RepoError),
}

impl Display for OpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console error: {err}"),
            Self::Db(err) => write!(f, "storage error: {err}"),
            Self::Repo(err) => write!(f, "storage error: {err}"),
        }
    }
}

impl Error for OpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<io::Error> for OpError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for OpError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for OpError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Lists every blog by name and prints the count and each name.
pub fn display_blogs<C: Console>(console: &mut C, blogs: &impl BlogRepository) -> OpResult {
    let listed = blogs.list_blogs(BlogOrder::Name)?;

    console.write_line(&format!("\n{} Blogs returned", listed.len()))?;
    for blog in &listed {
        console.write_line(&blog.name)?;
    }

    Ok(())
}

/// Prompts for a name and persists a new blog.
///
/// Empty input (or EOF) is rejected with an error log and no mutation.
pub fn add_blog<C: Console>(console: &mut C, blogs: &impl BlogRepository) -> OpResult {
    let name = console
        .prompt("Enter a name for a new Blog: ")?
        .unwrap_or_default();

    if name.is_empty() {
        error!("event=add_blog module=ops status=error error_code=empty_name");
        console.write_line("Blog name cannot be empty.")?;
        return Ok(());
    }

    blogs.add_blog(&NewBlog::new(&name))?;
    info!("event=add_blog module=ops status=ok name={name}");

    Ok(())
}

/// Runs the blog-selection / title / content flow and persists a post.
///
/// Any invalid selection or empty title aborts without mutation.
pub fn create_post<C: Console>(
    console: &mut C,
    blogs: &impl BlogRepository,
    posts: &impl PostRepository,
) -> OpResult {
    let listed = blogs.list_blogs(BlogOrder::Id)?;

    console.write_line("Select the blog you'd like to post to: ")?;
    for (index, blog) in listed.iter().enumerate() {
        console.write_line(&format!("{}) {}", index + 1, blog.name))?;
    }

    let Some(selected) = read_selection(console, &listed)? else {
        error!("event=create_post module=ops status=error error_code=invalid_selection");
        console.write_line("Invalid Blog ID.")?;
        return Ok(());
    };

    let title = console
        .prompt("Enter the Post Title: ")?
        .unwrap_or_default();
    if title.is_empty() {
        error!("event=create_post module=ops status=error error_code=empty_title");
        console.write_line("Post title cannot be empty.")?;
        return Ok(());
    }

    // Content intentionally accepts empty input; EOF reads as empty.
    let content = console
        .prompt("Enter the Post Content: ")?
        .unwrap_or_default();

    posts.add_post(&NewPost::new(selected.id, title.as_str(), content))?;
    info!(
        "event=create_post module=ops status=ok blog_id={} title={title}",
        selected.id
    );

    Ok(())
}

/// Runs the blog-selection flow and prints posts for one blog, or for
/// all blogs when `0` is chosen.
pub fn display_posts<C: Console>(
    console: &mut C,
    blogs: &impl BlogRepository,
    posts: &impl PostRepository,
) -> OpResult {
    let listed = blogs.list_blogs(BlogOrder::Id)?;

    console.write_line("Select the blog's posts to display:")?;
    console.write_line("0) Posts from ALL blogs")?;
    for (index, blog) in listed.iter().enumerate() {
        console.write_line(&format!("{}) Posts from {}", index + 1, blog.name))?;
    }

    let raw = console.read_line()?.unwrap_or_default();
    let choice = match raw.trim().parse::<usize>() {
        Ok(value) if value <= listed.len() => value,
        _ => {
            error!(
                "event=display_posts module=ops status=error error_code=invalid_selection input={raw}"
            );
            console.write_line("Invalid selection.")?;
            return Ok(());
        }
    };

    let shown = if choice == 0 {
        posts.list_all_posts()?
    } else {
        posts.list_posts_for_blog(listed[choice - 1].id)?
    };

    print_posts(console, &shown)
}

fn print_posts<C: Console>(console: &mut C, posts: &[PostWithBlog]) -> OpResult {
    console.write_line(&format!("\n{} post(s) returned", posts.len()))?;
    for post in posts {
        console.write_line(&format!("Blog: {}", post.blog_name))?;
        console.write_line(&format!("Title: {}", post.title))?;
        console.write_line(&format!("Content: {}\n", post.content))?;
    }
    Ok(())
}

/// Reads a 1-based selection over `listed`. Out-of-range, non-numeric,
/// and EOF input all read as `None`.
fn read_selection<'b, C: Console>(
    console: &mut C,
    listed: &'b [Blog],
) -> Result<Option<&'b Blog>, OpError> {
    let raw = console.read_line()?.unwrap_or_default();
    match raw.trim().parse::<usize>() {
        Ok(value) if value >= 1 && value <= listed.len() => Ok(Some(&listed[value - 1])),
        _ => Ok(None),
    }
}
