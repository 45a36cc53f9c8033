//! URL syntax validation for stored bookmarks.

use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum UrlCheckError {
    #[error("URL could not be parsed: {0}")]
    Unparseable(#[from] url::ParseError),

    #[error("URL scheme must be http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("URL is missing a host")]
    MissingHost,
}

/// Validates that a string is a well-formed absolute http(s) URL.
///
/// Relative URLs, non-web schemes (`javascript:`, `file:`, ...) and host-less
/// URLs are rejected.
pub fn ensure_http_url(raw: &str) -> Result<(), UrlCheckError> {
    let parsed = Url::parse(raw)?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UrlCheckError::UnsupportedScheme(other.to_string())),
    }

    if parsed.host_str().is_none() {
        return Err(UrlCheckError::MissingHost);
    }

    Ok(())
}
