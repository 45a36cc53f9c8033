//! Service entry point.
//!
//! Loads configuration from the environment, initializes logging, and hands
//! off to [`bookmarks::server::run`].

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use bookmarks::config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; real environment variables take precedence.
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.print_summary();

    bookmarks::server::run(config).await
}
