//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod bookmarks;
pub mod health;
pub mod redirect;

pub use auth::{
    change_password_handler, forgot_password_handler, login_handler, me_handler, refresh_handler,
    register_handler, reset_password_handler,
};
pub use bookmarks::{
    bookmark_list_handler, create_bookmark_handler, delete_bookmark_handler, my_bookmarks_handler,
    update_bookmark_handler,
};
pub use health::health_handler;
pub use redirect::redirect_handler;
