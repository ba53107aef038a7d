//! Domain model for the blog/post schema.
//!
//! # Responsibility
//! - Define the persisted read models and the insert drafts.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Identifiers are assigned by the storage engine on insert; drafts
//!   carry no identifier of their own.
//! - Every post references exactly one existing blog.

pub mod blog;
pub mod post;
