//! Interactive menu loop.
//!
//! # Responsibility
//! - Drive the display → read → dispatch cycle until quit.
//! - Open a fresh storage session for each dispatched operation.
//!
//! # Invariants
//! - Every read choice is logged before dispatch.
//! - Storage failures end the current operation only; the loop keeps
//!   running. Console failures end the loop.

use crate::console::Console;
use crate::ops::{self, OpError};
use blogpad_core::db::open_db;
use blogpad_core::{SqliteBlogRepository, SqlitePostRepository};
use log::{error, info};
use std::path::Path;

const QUIT_TOKEN: &str = "q";

/// Loop state after one menu iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Running,
    Terminated,
}

/// Operations reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    DisplayBlogs,
    AddBlog,
    CreatePost,
    DisplayPosts,
}

fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input {
        "1" => Some(MenuChoice::DisplayBlogs),
        "2" => Some(MenuChoice::AddBlog),
        "3" => Some(MenuChoice::CreatePost),
        "4" => Some(MenuChoice::DisplayPosts),
        _ => None,
    }
}

/// Runs the menu loop to completion.
///
/// Returns `Ok(())` on quit or EOF; only console I/O failures abort
/// the loop with an error.
pub fn run<C: Console>(console: &mut C, db_path: &Path) -> Result<(), OpError> {
    while step(console, db_path)? == MenuState::Running {}
    Ok(())
}

fn step<C: Console>(console: &mut C, db_path: &Path) -> Result<MenuState, OpError> {
    display_menu(console)?;

    let Some(choice) = console.read_line()? else {
        info!("event=menu_select module=menu choice=eof");
        return Ok(MenuState::Terminated);
    };
    info!("event=menu_select module=menu choice={choice}");

    if choice == QUIT_TOKEN {
        return Ok(MenuState::Terminated);
    }

    let Some(parsed) = parse_choice(&choice) else {
        console.write_line("Invalid selection. Please try again.")?;
        return Ok(MenuState::Running);
    };

    if let Err(err) = dispatch(console, db_path, parsed) {
        match err {
            OpError::Io(_) => return Err(err),
            OpError::Db(_) | OpError::Repo(_) => {
                error!("event=dispatch module=menu status=error choice={choice} error={err}");
                console.write_line(&format!("Operation failed: {err}"))?;
            }
        }
    }

    Ok(MenuState::Running)
}

fn display_menu<C: Console>(console: &mut C) -> Result<(), OpError> {
    console.write_line("\nEnter your selection:")?;
    console.write_line("1) Display all blogs")?;
    console.write_line("2) Add Blog")?;
    console.write_line("3) Create Post")?;
    console.write_line("4) Display Posts")?;
    console.write_line("Enter q to quit")?;
    Ok(())
}

fn dispatch<C: Console>(console: &mut C, db_path: &Path, choice: MenuChoice) -> Result<(), OpError> {
    // Fresh session per operation; migrations are version-guarded so
    // reopening after the first time is a no-op.
    let conn = open_db(db_path)?;
    let blogs = SqliteBlogRepository::new(&conn);
    let posts = SqlitePostRepository::new(&conn);

    match choice {
        MenuChoice::DisplayBlogs => ops::display_blogs(console, &blogs),
        MenuChoice::AddBlog => ops::add_blog(console, &blogs),
        MenuChoice::CreatePost => ops::create_post(console, &blogs, &posts),
        MenuChoice::DisplayPosts => ops::display_posts(console, &blogs, &posts),
    }
}
