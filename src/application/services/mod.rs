//! Business logic services for the application layer.

pub mod account_service;
pub mod bookmark_service;
pub mod token_service;

pub use account_service::AccountService;
pub use bookmark_service::BookmarkService;
pub use token_service::{TokenPair, TokenService, TokenUse};
