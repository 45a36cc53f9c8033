//! Utility functions shared across the application.
//!
//! - [`short_code`] - Short code generation for bookmark aliases
//! - [`url_check`] - URL syntax validation for stored bookmarks
//! - [`otp`] - One-time code generation for password resets

pub mod otp;
pub mod short_code;
pub mod url_check;
