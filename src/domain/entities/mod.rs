//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation inputs
//! use separate structs (`NewUser`, `NewBookmark`, `NewResetCode`) and partial
//! updates use `BookmarkPatch`.

pub mod bookmark;
pub mod reset_code;
pub mod user;

pub use bookmark::{Bookmark, BookmarkPatch, NewBookmark};
pub use reset_code::NewResetCode;
pub use user::{NewUser, User};
