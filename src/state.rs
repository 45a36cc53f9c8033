//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::{AccountService, BookmarkService, TokenService};
use crate::infrastructure::persistence::{
    PgBookmarkRepository, PgResetRepository, PgUserRepository,
};

pub type PgAccountService = AccountService<PgUserRepository, PgResetRepository>;
pub type PgBookmarkService = BookmarkService<PgBookmarkRepository>;

/// Dependency-injected service container, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<PgAccountService>,
    pub bookmark_service: Arc<PgBookmarkService>,
    pub token_service: Arc<TokenService>,
    /// Public origin used when rendering short URLs in responses.
    pub base_url: String,
}

impl AppState {
    pub fn new(
        account_service: Arc<PgAccountService>,
        bookmark_service: Arc<PgBookmarkService>,
        token_service: Arc<TokenService>,
        base_url: String,
    ) -> Self {
        Self {
            account_service,
            bookmark_service,
            token_service,
            base_url,
        }
    }
}
